use serde::{Deserialize, Serialize};

use crate::core::data::render_request::RenderRequest;
use crate::core::data::view::{Frame, View};
use crate::core::fractals::mandelbrot::palettes::PaletteKind;

/// Message sent to a render worker.
///
/// Field names follow the camelCase wire contract so the same message can be
/// posted to an out-of-process worker as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerRequest {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
    pub max_iterations: u32,
    /// Physical width in pixels.
    pub width: u32,
    /// Physical height in pixels.
    pub height: u32,
    pub device_pixel_ratio: f64,
    pub logical_width: u32,
    pub logical_height: u32,
    pub palette_id: PaletteKind,
}

impl From<&RenderRequest> for WorkerRequest {
    fn from(request: &RenderRequest) -> Self {
        Self {
            center_x: request.view.center_x,
            center_y: request.view.center_y,
            zoom: request.view.zoom,
            max_iterations: request.max_iterations,
            width: request.physical_width(),
            height: request.physical_height(),
            device_pixel_ratio: request.frame.device_pixel_ratio,
            logical_width: request.frame.logical_width,
            logical_height: request.frame.logical_height,
            palette_id: request.palette,
        }
    }
}

impl From<&WorkerRequest> for RenderRequest {
    fn from(message: &WorkerRequest) -> Self {
        Self {
            view: View::new(message.center_x, message.center_y, message.zoom),
            frame: Frame::new(
                message.logical_width,
                message.logical_height,
                message.device_pixel_ratio,
            ),
            max_iterations: message.max_iterations,
            palette: message.palette_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RenderRequest {
        RenderRequest {
            view: View::new(-0.5, 0.0, 200.0),
            frame: Frame::new(800, 600, 2.0),
            max_iterations: 200,
            palette: PaletteKind::Gold,
        }
    }

    #[test]
    fn test_message_carries_physical_dimensions() {
        let message = WorkerRequest::from(&request());

        assert_eq!(message.width, 1600);
        assert_eq!(message.height, 1200);
        assert_eq!(message.logical_width, 800);
        assert_eq!(message.logical_height, 600);
    }

    #[test]
    fn test_message_rebuilds_the_same_request() {
        let original = request();
        let message = WorkerRequest::from(&original);

        assert_eq!(RenderRequest::from(&message), original);
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(WorkerRequest::from(&request())).unwrap();

        assert_eq!(json["centerX"], -0.5);
        assert_eq!(json["centerY"], 0.0);
        assert_eq!(json["zoom"], 200.0);
        assert_eq!(json["maxIterations"], 200);
        assert_eq!(json["width"], 1600);
        assert_eq!(json["height"], 1200);
        assert_eq!(json["devicePixelRatio"], 2.0);
        assert_eq!(json["logicalWidth"], 800);
        assert_eq!(json["logicalHeight"], 600);
        assert_eq!(json["paletteId"], "gold");
    }

    #[test]
    fn test_unknown_palette_id_decodes_as_inferno() {
        let json = r#"{
            "centerX": 0.0, "centerY": 0.0, "zoom": 100.0, "maxIterations": 50,
            "width": 10, "height": 10, "devicePixelRatio": 1.0,
            "logicalWidth": 10, "logicalHeight": 10, "paletteId": "rainbow"
        }"#;

        let message: WorkerRequest = serde_json::from_str(json).unwrap();

        assert_eq!(message.palette_id, PaletteKind::Inferno);
    }

    #[test]
    fn test_encoded_message_decodes_to_same_request() {
        let original = request();
        let json = serde_json::to_string(&WorkerRequest::from(&original)).unwrap();
        let message: WorkerRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(message.palette_id, PaletteKind::Gold);
        assert_eq!(RenderRequest::from(&message), original);
    }
}
