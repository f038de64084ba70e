pub mod render_frame_rayon;
