use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, write_rgba};
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::algorithm::evaluate;
use crate::core::fractals::mandelbrot::smooth_colouring::colourize;
use crate::core::util::pixel_to_complex_coords::map_pixel_to_plane;

/// Renders single rows of a request into caller-provided RGBA slices.
///
/// Both the parallel and the cooperative strategies go through
/// [`render_row`], which keeps their output byte-identical.
pub fn render_row(request: &RenderRequest, py: u32, row: &mut [u8]) {
    let width = request.physical_width();
    debug_assert_eq!(row.len(), width as usize * BYTES_PER_PIXEL);

    for px in 0..width {
        let c = map_pixel_to_plane(px, py, &request.frame, &request.view);
        let result = evaluate(c.real, c.imag, request.max_iterations);
        let colour = colourize(result, request.max_iterations, request.palette);

        write_rgba(row, px as usize * BYTES_PER_PIXEL, colour);
    }
}

/// Renders rows `start_row..end_row` of `buffer`, clamped to its height.
///
/// Returns the first row not rendered.
pub fn render_rows(
    request: &RenderRequest,
    buffer: &mut PixelBuffer,
    start_row: u32,
    end_row: u32,
) -> u32 {
    let end_row = end_row.min(buffer.height());
    if start_row >= end_row {
        return end_row.max(start_row);
    }

    let row_bytes = buffer.row_bytes();
    if row_bytes == 0 {
        return end_row;
    }

    let band = buffer.rows_mut(start_row, end_row);
    for (offset, row) in band.chunks_exact_mut(row_bytes).enumerate() {
        render_row(request, start_row + offset as u32, row);
    }

    end_row
}

/// Renders a whole frame on the calling thread.
#[must_use]
pub fn render_frame_serial(request: &RenderRequest) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(request.physical_width(), request.physical_height());
    let height = buffer.height();
    render_rows(request, &mut buffer, 0, height);

    buffer
}
