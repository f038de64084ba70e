//! Fixed palette ramps mapping a parameter in `[0, 1]` to RGB.
//!
//! Channels are floored, never rounded, so output matches the reference
//! renders byte for byte.

pub mod gold;
pub mod grayscale;
pub mod inferno;
pub mod kinds;
pub mod ocean;

pub use kinds::PaletteKind;

#[inline]
pub(crate) fn channel(value: f64) -> u8 {
    value.floor() as u8
}

/// Linear ramp between two endpoint colours, floored per channel.
#[inline]
pub(crate) fn lerp_channels(from: [f64; 3], span: [f64; 3], s: f64) -> (u8, u8, u8) {
    (
        channel(from[0] + span[0] * s),
        channel(from[1] + span[1] * s),
        channel(from[2] + span[2] * s),
    )
}
