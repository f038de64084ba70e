use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palettes::lerp_channels;

/// Deep navy to bright cyan-blue.
#[must_use]
pub fn ocean(t: f64) -> Colour {
    lerp_channels([5.0, 20.0, 60.0], [40.0, 130.0, 195.0], t).into()
}
