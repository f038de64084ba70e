use serde::{Deserialize, Serialize};

/// Centre point on the complex plane plus a linear scale in pixels per unit.
///
/// `zoom` must be positive. Callers enforce the zoom floor before a view
/// reaches the renderer.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
}

impl View {
    #[must_use]
    pub const fn new(center_x: f64, center_y: f64, zoom: f64) -> Self {
        Self {
            center_x,
            center_y,
            zoom,
        }
    }
}

/// Logical display size and the physical-to-logical pixel ratio.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub logical_width: u32,
    pub logical_height: u32,
    pub device_pixel_ratio: f64,
}

impl Frame {
    #[must_use]
    pub const fn new(logical_width: u32, logical_height: u32, device_pixel_ratio: f64) -> Self {
        Self {
            logical_width,
            logical_height,
            device_pixel_ratio,
        }
    }

    #[must_use]
    pub fn physical_width(&self) -> u32 {
        scale_dimension(self.logical_width, self.device_pixel_ratio)
    }

    #[must_use]
    pub fn physical_height(&self) -> u32 {
        scale_dimension(self.logical_height, self.device_pixel_ratio)
    }
}

fn scale_dimension(logical: u32, ratio: f64) -> u32 {
    (f64::from(logical) * ratio).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_size_matches_logical_at_unit_ratio() {
        let frame = Frame::new(800, 600, 1.0);

        assert_eq!(frame.physical_width(), 800);
        assert_eq!(frame.physical_height(), 600);
    }

    #[test]
    fn test_physical_size_scales_with_ratio() {
        let frame = Frame::new(800, 600, 2.0);

        assert_eq!(frame.physical_width(), 1600);
        assert_eq!(frame.physical_height(), 1200);
    }

    #[test]
    fn test_physical_size_rounds_fractional_ratio() {
        let frame = Frame::new(101, 33, 1.5);

        assert_eq!(frame.physical_width(), 152); // 151.5 rounds up
        assert_eq!(frame.physical_height(), 50); // 49.5 rounds up
    }

    #[test]
    fn test_view_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(View::new(-0.5, 0.0, 200.0)).unwrap();

        assert_eq!(json["centerX"], -0.5);
        assert_eq!(json["centerY"], 0.0);
        assert_eq!(json["zoom"], 200.0);
    }
}
