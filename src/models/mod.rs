pub mod barcode;
pub mod grid;

pub use barcode::{DecodeError, Ean13};
pub use grid::{GrayscaleGrid, GridShapeError};
