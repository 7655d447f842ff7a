//! EAN-13 symbol synthesis
//!
//! Renders a digit string into the exact module bits the decoder consumes,
//! and on to pixel rows/grids. Used by the synthetic binaries, the benches,
//! and the round-trip tests; shares the decoder's pattern tables so encode
//! and decode can never drift apart.
//!
//! Pattern bit 1 renders as a bright pixel (255) and bit 0 as dark (0),
//! matching the thresholding convention (1 = at/above threshold).

use crate::decoder::ean13::{G_PATTERNS, L_PATTERNS, PARITY_PATTERNS, Parity, R_PATTERNS};
use crate::decoder::{checksum_digit, checksum_valid};
use crate::models::{GrayscaleGrid, GridShapeError};

/// Parse and validate a 13-digit string, returning its digit values
///
/// `None` when the string is not exactly 13 ASCII digits or the check digit
/// is wrong.
pub fn parse_digits(text: &str) -> Option<[u8; 13]> {
    let bytes = text.as_bytes();
    if bytes.len() != 13 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut digits = [0u8; 13];
    for (i, &b) in bytes.iter().enumerate() {
        digits[i] = b - b'0';
    }
    if checksum_valid(&digits) { Some(digits) } else { None }
}

/// Complete a 12-digit payload with its EAN-13 check digit
pub fn with_check_digit(payload: &[u8; 12]) -> [u8; 13] {
    let mut digits = [0u8; 13];
    digits[..12].copy_from_slice(payload);
    digits[12] = checksum_digit(payload);
    digits
}

/// Encode a checksum-valid 13-digit string into its 95 module bits
pub fn encode_bits(text: &str) -> Option<Vec<u8>> {
    parse_digits(text).map(encode_bits_unchecked)
}

/// Encode digit values into module bits without validating the check digit
///
/// Exists so tests can build structurally well-formed symbols with bad
/// checksums; normal callers want [`encode_bits`].
pub fn encode_bits_unchecked(digits: [u8; 13]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(95);
    bits.extend([1, 0, 1]); // start guard

    let parity = &PARITY_PATTERNS[digits[0] as usize];
    for (i, &p) in parity.iter().enumerate() {
        let d = digits[1 + i] as usize;
        let pattern = match p {
            Parity::L => &L_PATTERNS[d],
            Parity::G => &G_PATTERNS[d],
        };
        bits.extend_from_slice(pattern);
    }

    bits.extend([0, 1, 0, 1, 0]); // middle guard

    for i in 0..6 {
        bits.extend_from_slice(&R_PATTERNS[digits[7 + i] as usize]);
    }

    bits.extend([1, 0, 1]); // end guard
    bits
}

/// Render module bits into a pixel row at a given module width, with quiet
/// zones of `quiet` bright pixels on both sides
pub fn render_row(bits: &[u8], module_px: usize, quiet: usize) -> Vec<u8> {
    let mut row = Vec::with_capacity(bits.len() * module_px + 2 * quiet);
    row.extend(std::iter::repeat_n(255u8, quiet));
    for &bit in bits {
        let value = if bit == 1 { 255u8 } else { 0u8 };
        row.extend(std::iter::repeat_n(value, module_px));
    }
    row.extend(std::iter::repeat_n(255u8, quiet));
    row
}

/// Render module bits at a fractional module width
///
/// Module `k` spans pixels `round(k*module_px)..round((k+1)*module_px)`, so
/// non-integer widths produce the uneven run lengths a camera would; useful
/// for exercising the rescaled scan tier.
pub fn render_row_fractional(bits: &[u8], module_px: f32, quiet: usize) -> Vec<u8> {
    let mut row = Vec::new();
    row.extend(std::iter::repeat_n(255u8, quiet));
    for (k, &bit) in bits.iter().enumerate() {
        let start = (k as f32 * module_px).round() as usize;
        let end = ((k + 1) as f32 * module_px).round() as usize;
        let value = if bit == 1 { 255u8 } else { 0u8 };
        row.extend(std::iter::repeat_n(value, end.saturating_sub(start)));
    }
    row.extend(std::iter::repeat_n(255u8, quiet));
    row
}

/// Embed a rendered symbol row into an all-bright grid
///
/// The row is placed starting at `(x, y)` and truncated at the right edge if
/// it does not fit. Convenience for synthetic fixtures.
pub fn embed_in_grid(
    width: u32,
    height: u32,
    row_pixels: &[u8],
    x: u32,
    y: u32,
) -> Result<GrayscaleGrid, GridShapeError> {
    let mut pixels = vec![255u8; width as usize * height as usize];
    if y < height {
        let base = y as usize * width as usize;
        for (i, &p) in row_pixels.iter().enumerate() {
            let col = x as usize + i;
            if col >= width as usize {
                break;
            }
            pixels[base + col] = p;
        }
    }
    GrayscaleGrid::new(width, height, pixels)
}
