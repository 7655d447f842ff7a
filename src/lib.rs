//! ean-scan - Pure Rust EAN-13 barcode scanning library
//!
//! Software-only decoding of EAN-13 symbols from grayscale pixel grids: no
//! dedicated barcode library, just geometric line sampling, Otsu adaptive
//! thresholding, and the EAN-13 symbology state machine, with results
//! corroborated across many independent scan lines by a vote tally.
//!
//! ```
//! use ean_scan::{decode, encoder};
//!
//! let bits = encoder::encode_bits("6901234567892").unwrap();
//! let row = encoder::render_row(&bits, 1, 20);
//! let grid = encoder::embed_in_grid(row.len() as u32, 100, &row, 0, 51).unwrap();
//! assert_eq!(decode(&grid).unwrap().as_str(), "6901234567892");
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// EAN-13 symbol decoding (pattern tables, parity, checksum)
pub mod decoder;
/// Synthetic symbol generation (the decoder's round-trip counterpart)
pub mod encoder;
/// Core data structures (GrayscaleGrid, Ean13, errors)
pub mod models;
/// Scan orchestration (tier cascade, vote tally, Scanner options)
pub mod pipeline;
/// Candidate line generation (row schedules, rotation, rescaling)
pub mod sampler;
/// Utility functions (binarization, grayscale conversion)
pub mod utils;
/// Validation of externally supplied barcode strings
pub mod validate;

pub use models::{DecodeError, Ean13, GrayscaleGrid, GridShapeError};
pub use pipeline::{Scanner, decode};
