pub mod algorithm;
pub mod palettes;
pub mod smooth_colouring;
