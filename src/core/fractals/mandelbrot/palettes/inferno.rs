use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palettes::lerp_channels;

const SEGMENT_WIDTH: f64 = 0.25;

// (start colour, per-channel delta) for each quarter of the ramp.
const SEGMENTS: [([f64; 3], [f64; 3]); 4] = [
    ([10.0, 7.0, 46.0], [68.0, 5.0, 72.0]),
    ([78.0, 12.0, 118.0], [90.0, 46.0, -35.0]),
    ([168.0, 58.0, 83.0], [58.0, 74.0, -69.0]),
    ([226.0, 132.0, 14.0], [26.0, 122.0, 238.0]),
];

/// Dark purple through deep red and orange to pale yellow.
#[must_use]
pub fn inferno(t: f64) -> Colour {
    let segment = if t < 0.25 {
        0
    } else if t < 0.5 {
        1
    } else if t < 0.75 {
        2
    } else {
        3
    };

    let (from, span) = SEGMENTS[segment];
    let s = (t - segment as f64 * SEGMENT_WIDTH) / SEGMENT_WIDTH;

    lerp_channels(from, span, s).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_dark_purple() {
        assert_eq!(inferno(0.0), Colour::new(10, 7, 46));
    }

    #[test]
    fn test_segment_boundaries_hit_endpoint_colours() {
        assert_eq!(inferno(0.25), Colour::new(78, 12, 118));
        assert_eq!(inferno(0.5), Colour::new(168, 58, 83));
        assert_eq!(inferno(0.75), Colour::new(226, 132, 14));
    }

    #[test]
    fn test_end_is_pale_yellow() {
        assert_eq!(inferno(1.0), Colour::new(252, 254, 252));
    }

    #[test]
    fn test_mid_segment_truncates_channels() {
        // s = 0.5 in the first segment: 10 + 34, 7 + 2.5, 46 + 36
        assert_eq!(inferno(0.125), Colour::new(44, 9, 82));
    }
}
