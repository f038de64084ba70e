pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod pixel_result;
pub mod render_request;
pub mod view;
