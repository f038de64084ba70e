use crate::core::data::colour::Colour;
use crate::core::data::pixel_result::PixelResult;
use crate::core::fractals::mandelbrot::palettes::PaletteKind;

/// Number of times the palette repeats across the full iteration range.
pub const COLOUR_CYCLE_FACTOR: f64 = 8.0;

/// Continuous palette parameter in `[0, 1)` for an escaped point.
///
/// Uses the normalized iteration count `n + 1 - log2(log2(|z|))` so adjacent
/// integer bands blend without visible steps.
#[inline]
#[must_use]
pub fn smooth_parameter(result: PixelResult, max_iterations: u32) -> f64 {
    let log2 = std::f64::consts::LN_2;
    let nu = (result.magnitude_squared.sqrt().ln() / log2).ln() / log2;
    let smooth = f64::from(result.iterations) + 1.0 - nu;
    let t = (smooth / f64::from(max_iterations)).clamp(0.0, 1.0);

    (t * COLOUR_CYCLE_FACTOR) % 1.0
}

/// Colour for one evaluated point. Interior points are pure black.
#[inline]
#[must_use]
pub fn colourize(result: PixelResult, max_iterations: u32, palette: PaletteKind) -> Colour {
    if result.is_interior(max_iterations) {
        return Colour::BLACK;
    }

    palette.colour(smooth_parameter(result, max_iterations))
}
