use crate::core::data::view::{Frame, View};
use crate::core::fractals::mandelbrot::palettes::PaletteKind;

/// Immutable snapshot of everything needed to reproduce one frame.
///
/// Equal requests always produce byte-identical pixel buffers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub view: View,
    pub frame: Frame,
    pub max_iterations: u32,
    pub palette: PaletteKind,
}

impl RenderRequest {
    #[must_use]
    pub fn physical_width(&self) -> u32 {
        self.frame.physical_width()
    }

    #[must_use]
    pub fn physical_height(&self) -> u32 {
        self.frame.physical_height()
    }
}
