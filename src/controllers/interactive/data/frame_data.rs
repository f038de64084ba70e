use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Which execution strategy produced a frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderStrategy {
    Parallel,
    Cooperative,
}

impl std::fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parallel => f.write_str("parallel"),
            Self::Cooperative => f.write_str("cooperative"),
        }
    }
}

/// A completed frame, handed to the presentation surface by value.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    pub max_iterations: u32,
    pub strategy: RenderStrategy,
    pub render_duration: Duration,
}
