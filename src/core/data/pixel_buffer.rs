use crate::core::data::colour::Colour;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

fn dimensions_to_buffer_size(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}

/// Byte offset of pixel `(x, y)` in a row-major RGBA buffer `width` pixels wide.
#[inline]
#[must_use]
pub fn pixel_offset(x: u32, y: u32, width: u32) -> usize {
    (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL
}

/// Writes one opaque RGBA quadruple at `offset`.
#[inline]
pub fn write_rgba(bytes: &mut [u8], offset: usize, colour: Colour) {
    bytes[offset] = colour.r;
    bytes[offset + 1] = colour.g;
    bytes[offset + 2] = colour.b;
    bytes[offset + 3] = 255;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{x}, y:{y} outside of {width}x{height} buffer")]
    PixelOutsideBounds { x: u32, y: u32, width: u32, height: u32 },
    #[error("dimensions need {expected} bytes but buffer holds {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
    #[error("{width}x{height} pixels are too large for a buffer")]
    TooLarge { width: u32, height: u32 },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 pixels, origin top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Zeroed buffer of `width` x `height` pixels.
    ///
    /// # Panics
    ///
    /// If the byte size of the frame overflows `usize`.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let Some(size) = dimensions_to_buffer_size(width, height) else {
            panic!("{}", PixelBufferError::TooLarge { width, height });
        };

        Self {
            width,
            height,
            buffer: vec![0; size],
        }
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = dimensions_to_buffer_size(width, height)
            .ok_or(PixelBufferError::TooLarge { width, height })?;

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Mutable bytes for rows `start_row..end_row`.
    pub(crate) fn rows_mut(&mut self, start_row: u32, end_row: u32) -> &mut [u8] {
        let row_bytes = self.row_bytes();
        let start = start_row as usize * row_bytes;
        let end = end_row.min(self.height) as usize * row_bytes;

        &mut self.buffer[start..end]
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let offset = pixel_offset(x, y, self.width);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.buffer[offset..offset + BYTES_PER_PIXEL]);

        Some(rgba)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        if x >= self.width || y >= self.height {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        write_rgba(&mut self.buffer, pixel_offset(x, y, self.width), colour);

        Ok(())
    }
}
