use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

/// Writes `buffer` as a binary PPM (P6). Alpha is dropped.
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = BufWriter::new(std::fs::File::create(filepath)?);

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", buffer.width(), buffer.height())?;
    writeln!(file, "255")?;

    for pixel in buffer.buffer().chunks_exact(BYTES_PER_PIXEL) {
        file.write_all(&pixel[..3])?;
    }

    file.flush()
}
