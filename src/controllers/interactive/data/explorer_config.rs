use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::view::{Frame, View};
use crate::core::fractals::mandelbrot::palettes::PaletteKind;

const DEFAULT_MAX_ITERATIONS: u32 = 200;
const DEFAULT_ZOOM_FACTOR: f64 = 2.0;
const DEFAULT_MIN_ZOOM: f64 = 50.0;
const DEFAULT_BATCHES_PER_FRAME: u32 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse explorer config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid explorer config: {0}")]
    Invalid(String),
}

/// Range and step of the iteration budget control.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IterationBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl Default for IterationBounds {
    fn default() -> Self {
        Self {
            min: 50,
            max: 1000,
            step: 50,
        }
    }
}

impl IterationBounds {
    /// Moves `current` by `direction` steps, staying inside the bounds.
    #[must_use]
    pub fn step_from(&self, current: u32, direction: i32) -> u32 {
        let delta = i64::from(direction) * i64::from(self.step);
        let next = (i64::from(current) + delta).clamp(i64::from(self.min), i64::from(self.max));

        next as u32
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExplorerConfig {
    pub default_view: View,
    pub default_frame: Frame,
    pub default_max_iterations: u32,
    pub default_palette: PaletteKind,
    pub iteration_bounds: IterationBounds,
    pub zoom_factor: f64,
    pub min_zoom: f64,
    /// Cooperative renders split the frame into this many row batches.
    pub batches_per_frame: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            default_view: View::new(-0.5, 0.0, 200.0),
            default_frame: Frame::new(800, 600, 1.0),
            default_max_iterations: DEFAULT_MAX_ITERATIONS,
            default_palette: PaletteKind::default(),
            iteration_bounds: IterationBounds::default(),
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            min_zoom: DEFAULT_MIN_ZOOM,
            batches_per_frame: DEFAULT_BATCHES_PER_FRAME,
        }
    }
}

impl ExplorerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let view = self.default_view;
        if !(view.zoom > 0.0 && view.center_x.is_finite() && view.center_y.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "default view must be finite with positive zoom, got {:?}",
                view
            )));
        }
        if !(self.min_zoom > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "min zoom must be positive, got {}",
                self.min_zoom
            )));
        }
        if !(self.zoom_factor > 1.0) {
            return Err(ConfigError::Invalid(format!(
                "zoom factor must be greater than one, got {}",
                self.zoom_factor
            )));
        }
        if !(self.default_frame.device_pixel_ratio > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "device pixel ratio must be positive, got {}",
                self.default_frame.device_pixel_ratio
            )));
        }
        let bounds = self.iteration_bounds;
        if bounds.min == 0 || bounds.min > bounds.max || bounds.step == 0 {
            return Err(ConfigError::Invalid(format!(
                "iteration bounds {}..={} step {} are empty",
                bounds.min, bounds.max, bounds.step
            )));
        }
        if self.batches_per_frame == 0 {
            return Err(ConfigError::Invalid(
                "batches per frame must be at least one".to_string(),
            ));
        }

        Ok(())
    }
}
