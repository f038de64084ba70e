use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::render_rows::render_rows::render_row;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;

/// Renders a full frame with rows spread over rayon's work-stealing pool.
///
/// For cancel-aware rendering, use [`render_frame_rayon_cancelable`].
#[must_use]
pub fn render_frame_rayon(request: &RenderRequest) -> PixelBuffer {
    match render_frame_rayon_cancelable(request, &NeverCancel) {
        Ok(buffer) => buffer,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Renders a full frame in parallel, checking `cancel` at the start of every row.
///
/// Returns [`Cancelled`] as soon as any row observes cancellation; the
/// partially filled buffer is dropped.
pub fn render_frame_rayon_cancelable<C: CancelToken>(
    request: &RenderRequest,
    cancel: &C,
) -> Result<PixelBuffer, Cancelled> {
    let mut buffer = PixelBuffer::new(request.physical_width(), request.physical_height());
    let row_bytes = buffer.row_bytes();

    if row_bytes == 0 {
        return Ok(buffer);
    }

    buffer
        .data_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .try_for_each(|(py, row)| {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            render_row(request, py as u32, row);
            Ok(())
        })?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_rows::render_rows::render_frame_serial;
    use crate::core::data::view::{Frame, View};
    use crate::core::fractals::mandelbrot::palettes::PaletteKind;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    fn request(palette: PaletteKind) -> RenderRequest {
        RenderRequest {
            view: View::new(-0.75, 0.1, 150.0),
            frame: Frame::new(48, 32, 1.5),
            max_iterations: 150,
            palette,
        }
    }

    #[test]
    fn test_parallel_matches_serial_byte_for_byte() {
        for &palette in PaletteKind::ALL {
            let req = request(palette);

            assert_eq!(render_frame_rayon(&req), render_frame_serial(&req));
        }
    }

    #[test]
    fn test_repeated_renders_are_identical() {
        let req = request(PaletteKind::Ocean);

        assert_eq!(render_frame_rayon(&req), render_frame_rayon(&req));
    }

    #[test]
    fn test_buffer_has_physical_dimensions() {
        let buffer = render_frame_rayon(&request(PaletteKind::Gold));

        assert_eq!(buffer.width(), 72);
        assert_eq!(buffer.height(), 48);
        assert_eq!(buffer.buffer_size(), 72 * 48 * 4);
    }

    #[test]
    fn test_cancelled_before_start_returns_cancelled() {
        let flag = AtomicBool::new(true);
        let token = || flag.load(Ordering::Relaxed);

        let result = render_frame_rayon_cancelable(&request(PaletteKind::Inferno), &token);

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_cancel_mid_render_stops_early() {
        let rows_seen = AtomicUsize::new(0);
        let token = || rows_seen.fetch_add(1, Ordering::Relaxed) >= 5;

        let result = render_frame_rayon_cancelable(&request(PaletteKind::Inferno), &token);

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_empty_frame_renders_empty_buffer() {
        let mut req = request(PaletteKind::Inferno);
        req.frame = Frame::new(0, 10, 1.0);

        let buffer = render_frame_rayon(&req);

        assert_eq!(buffer.buffer_size(), 0);
    }
}
