/// Raw escape-time output for a single point.
///
/// `iterations == max_iterations` means the orbit never left the escape
/// radius and the point is treated as interior.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelResult {
    pub iterations: u32,
    pub magnitude_squared: f64,
}

impl PixelResult {
    #[must_use]
    pub fn is_interior(&self, max_iterations: u32) -> bool {
        self.iterations == max_iterations
    }
}
