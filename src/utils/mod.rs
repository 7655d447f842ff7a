//! Signal-level helpers shared across the scanning pipeline
//!
//! - Binarization (Otsu line thresholding)
//! - Grayscale conversion (RGB to luminance, for binaries/tests)

pub mod binarization;
pub mod grayscale;
