use crate::core::data::complex::Complex;
use crate::core::data::view::{Frame, View};

/// Maps physical pixel `(px, py)` to the point on the complex plane under `view`.
///
/// Physical coordinates are first scaled back to logical ones so the view's
/// centre always lands on the middle of the logical frame, whatever the device
/// pixel ratio.
#[inline]
#[must_use]
pub fn map_pixel_to_plane(px: u32, py: u32, frame: &Frame, view: &View) -> Complex {
    let inv_dpr = 1.0 / frame.device_pixel_ratio;
    let half_w = f64::from(frame.logical_width) / 2.0;
    let half_h = f64::from(frame.logical_height) / 2.0;

    Complex {
        real: view.center_x + (f64::from(px) * inv_dpr - half_w) / view.zoom,
        imag: view.center_y + (f64::from(py) * inv_dpr - half_h) / view.zoom,
    }
}

/// Maps a logical (CSS-style) position, e.g. a pointer location, to the plane.
#[inline]
#[must_use]
pub fn map_logical_to_plane(x: f64, y: f64, frame: &Frame, view: &View) -> Complex {
    let half_w = f64::from(frame.logical_width) / 2.0;
    let half_h = f64::from(frame.logical_height) / 2.0;

    Complex {
        real: view.center_x + (x - half_w) / view.zoom,
        imag: view.center_y + (y - half_h) / view.zoom,
    }
}
