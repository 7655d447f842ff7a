use thiserror::Error;

/// Error produced when constructing a [`GrayscaleGrid`] from mismatched parts.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("pixel buffer length {len} does not match {width}x{height}")]
pub struct GridShapeError {
    /// Declared width in pixels
    pub width: u32,
    /// Declared height in pixels
    pub height: u32,
    /// Actual pixel buffer length
    pub len: usize,
}

/// Immutable row-major grayscale image
///
/// One byte per pixel, 0 = black, 255 = white. The scanner only ever reads
/// from it; derived grids (rotated, rescaled) are fresh allocations.
#[derive(Debug, Clone)]
pub struct GrayscaleGrid {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl GrayscaleGrid {
    /// Create a grid, validating that the buffer matches the dimensions
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, GridShapeError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(GridShapeError {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Grid width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the grid holds no pixels at all
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw pixel buffer, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// One row of intensities; empty slice when `y` is out of range
    pub fn row(&self, y: u32) -> &[u8] {
        if y >= self.height {
            return &[];
        }
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    /// Pixel at (x, y); 0 when out of range
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}
