use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palettes::lerp_channels;

/// Near-black to warm gold.
#[must_use]
pub fn gold(t: f64) -> Colour {
    lerp_channels([30.0, 10.0, 5.0], [170.0, 152.0, 101.0], t).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(gold(0.0), Colour::new(30, 10, 5));
        assert_eq!(gold(1.0), Colour::new(200, 162, 106));
    }

    #[test]
    fn test_midpoint_is_floored() {
        assert_eq!(gold(0.5), Colour::new(115, 86, 55));
    }
}
