//! Geometric grid transforms for the fallback scan tiers
//!
//! Both transforms are deterministic index arithmetic with no interpolation;
//! the exact resampling rule is part of observable behavior, since it decides
//! which images decode.

use crate::models::GrayscaleGrid;

/// Rotate a grid 90 degrees (transpose and reverse)
///
/// Output dimensions are swapped; a vertical symbol along source column `c`
/// becomes a horizontal symbol along output row `c`.
pub fn rotate90(grid: &GrayscaleGrid) -> GrayscaleGrid {
    let src_w = grid.width();
    let src_h = grid.height();
    let mut pixels = vec![0u8; src_w as usize * src_h as usize];

    for y in 0..src_w {
        let row_base = y as usize * src_h as usize;
        for x in 0..src_h {
            pixels[row_base + x as usize] = grid.get(y, src_h - 1 - x);
        }
    }

    GrayscaleGrid::new(src_h, src_w, pixels).expect("dimension swap preserves pixel count")
}

/// Rescale a grid by a factor using nearest-neighbor sampling
///
/// Source index = (dest index * source dim) / dest dim, so a 2.0 upscale
/// replicates every source pixel exactly and a 0.5 downscale keeps every
/// second pixel. Degenerate factors collapse to a 1x1 floor rather than an
/// empty grid.
pub fn rescale(grid: &GrayscaleGrid, factor: f32) -> GrayscaleGrid {
    if grid.is_empty() || factor <= 0.0 {
        return grid.clone();
    }
    let dst_w = ((grid.width() as f32 * factor).round() as u32).max(1);
    let dst_h = ((grid.height() as f32 * factor).round() as u32).max(1);

    let mut pixels = Vec::with_capacity(dst_w as usize * dst_h as usize);
    for y in 0..dst_h {
        let src_y = (y as u64 * grid.height() as u64 / dst_h as u64) as u32;
        for x in 0..dst_w {
            let src_x = (x as u64 * grid.width() as u64 / dst_w as u64) as u32;
            pixels.push(grid.get(src_x, src_y));
        }
    }

    GrayscaleGrid::new(dst_w, dst_h, pixels).expect("buffer built to match dimensions")
}
