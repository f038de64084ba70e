/// Rows finished so far by a cooperative render.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderProgress {
    pub generation: u64,
    pub rows_completed: u32,
    pub total_rows: u32,
}

impl RenderProgress {
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total_rows == 0 {
            return 1.0;
        }

        f64::from(self.rows_completed) / f64::from(self.total_rows)
    }

    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0).round() as u32
    }
}
