use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palettes::channel;

#[must_use]
pub fn grayscale(t: f64) -> Colour {
    let v = channel(255.0 * t);
    Colour::new(v, v, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(grayscale(0.0), Colour::new(0, 0, 0));
        assert_eq!(grayscale(1.0), Colour::new(255, 255, 255));
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        // 255 * 0.999 = 254.745
        assert_eq!(grayscale(0.999), Colour::new(254, 254, 254));
    }
}
