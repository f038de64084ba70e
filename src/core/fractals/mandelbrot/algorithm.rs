use crate::core::data::pixel_result::PixelResult;

/// Squared escape radius. Once `|z|^2` exceeds 4 the orbit diverges.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z -> z^2 + c` from `z = 0` for `c = x0 + i*y0`.
///
/// Tracks `x^2` and `y^2` separately so the bailout test needs no square root.
/// Always halts after at most `max_iterations` steps.
#[inline]
#[must_use]
pub fn evaluate(x0: f64, y0: f64, max_iterations: u32) -> PixelResult {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut xx = 0.0;
    let mut yy = 0.0;
    let mut iterations = 0;

    while xx + yy <= ESCAPE_RADIUS_SQUARED && iterations < max_iterations {
        y = 2.0 * x * y + y0;
        x = xx - yy + x0;
        xx = x * x;
        yy = y * y;
        iterations += 1;
    }

    PixelResult {
        iterations,
        magnitude_squared: xx + yy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_centre_is_interior() {
        let result = evaluate(-0.5, 0.0, 200);

        assert_eq!(result.iterations, 200);
        assert!(result.is_interior(200));
    }

    #[test]
    fn test_far_point_escapes_after_first_step() {
        let result = evaluate(2.0, 2.0, 50);

        assert_eq!(result.iterations, 1);
        assert_eq!(result.magnitude_squared, 8.0);
    }

    #[test]
    fn test_origin_never_escapes() {
        let result = evaluate(0.0, 0.0, 1000);

        assert_eq!(result.iterations, 1000);
        assert_eq!(result.magnitude_squared, 0.0);
    }

    #[test]
    fn test_zero_budget_performs_no_steps() {
        let result = evaluate(2.0, 2.0, 0);

        assert_eq!(result.iterations, 0);
        assert_eq!(result.magnitude_squared, 0.0);
    }

    #[test]
    fn test_never_exceeds_budget() {
        for &(x0, y0) in &[(-2.0, 0.0), (0.25, 0.0), (-0.75, 0.1), (0.3, 0.5), (-1.0, 0.0)] {
            for max_iterations in [1, 7, 64, 255] {
                let result = evaluate(x0, y0, max_iterations);
                assert!(result.iterations <= max_iterations);
            }
        }
    }

    #[test]
    fn test_escaped_points_exceed_radius() {
        let result = evaluate(0.5, 0.5, 100);

        assert!(result.iterations < 100);
        assert!(result.magnitude_squared > ESCAPE_RADIUS_SQUARED);
    }

    #[test]
    fn test_tip_of_real_axis_stays_bounded() {
        // c = -2 settles on the fixed point z = 2, |z|^2 = 4 exactly.
        let result = evaluate(-2.0, 0.0, 100);

        assert_eq!(result.iterations, 100);
        assert_eq!(result.magnitude_squared, 4.0);
    }
}
