//! RGB to luminance conversion for callers that start from color images
//!
//! The scanner itself only consumes grayscale grids; these helpers exist for
//! the binaries and tests that obtain pixels from image files.
//! Y = 0.299*R + 0.587*G + 0.114*B, via fast integer arithmetic:
//! Y = (76*R + 150*G + 29*B) >> 8

use rayon::prelude::*;

const COEF_R: i32 = 76;
const COEF_G: i32 = 150;
const COEF_B: i32 = 29;

/// Convert a flat RGB buffer (3 bytes per pixel) to grayscale
pub fn rgb_to_grayscale(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    let mut gray = vec![0u8; pixel_count];
    for (i, out) in gray.iter_mut().enumerate() {
        let idx = i * 3;
        let r = rgb[idx] as i32;
        let g = rgb[idx + 1] as i32;
        let b = rgb[idx + 2] as i32;
        let lum = (COEF_R * r + COEF_G * g + COEF_B * b) >> 8;
        *out = lum.min(255) as u8;
    }
    gray
}

/// Convert RGB to grayscale processing rows in parallel
pub fn rgb_to_grayscale_parallel(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    let mut gray = vec![0u8; pixel_count];

    gray.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let row_start = y * width * 3;
        for (x, out) in row.iter_mut().enumerate() {
            let idx = row_start + x * 3;
            let r = rgb[idx] as i32;
            let g = rgb[idx + 1] as i32;
            let b = rgb[idx + 2] as i32;
            let lum = (COEF_R * r + COEF_G * g + COEF_B * b) >> 8;
            *out = lum.min(255) as u8;
        }
    });

    gray
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_known_values() {
        // Pure white and pure black
        let rgb = vec![255, 255, 255, 0, 0, 0];
        let gray = rgb_to_grayscale(&rgb, 2, 1);
        assert!(gray[0] >= 248);
        assert_eq!(gray[1], 0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let rgb: Vec<u8> = (0..30 * 20 * 3).map(|i| (i * 7 % 256) as u8).collect();
        assert_eq!(
            rgb_to_grayscale(&rgb, 30, 20),
            rgb_to_grayscale_parallel(&rgb, 30, 20)
        );
    }
}
