mod controllers;
mod core;
mod presenters;
mod storage;

pub use controllers::interactive::{
    ConfigError, ExplorerConfig, ExplorerSession, FrameData, IterationBounds, PresenterPort,
    RenderEvent, RenderPhase, RenderProgress, RenderScheduler, RenderStrategy, RenderWorker,
    ThreadWorker, ViewSummary, WorkerError, WorkerEvent, WorkerJob, WorkerRequest,
};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::render_frame::render_frame_rayon::{
    render_frame_rayon, render_frame_rayon_cancelable,
};
pub use crate::core::actions::render_rows::render_rows::{render_frame_serial, render_row, render_rows};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError, pixel_offset, write_rgba};
pub use crate::core::data::pixel_result::PixelResult;
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::data::view::{Frame, View};
pub use crate::core::fractals::mandelbrot::algorithm::{ESCAPE_RADIUS_SQUARED, evaluate};
pub use crate::core::fractals::mandelbrot::palettes::PaletteKind;
pub use crate::core::fractals::mandelbrot::smooth_colouring::{
    COLOUR_CYCLE_FACTOR, colourize, smooth_parameter,
};
pub use crate::core::util::pixel_to_complex_coords::{map_logical_to_plane, map_pixel_to_plane};
pub use presenters::file::ppm::PpmFilePresenter;
pub use storage::write_ppm::write_ppm;
