pub mod cancellation;
pub mod render_frame;
pub mod render_rows;
