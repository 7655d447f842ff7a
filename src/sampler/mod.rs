//! Candidate line generation for the scan cascade
//!
//! Produces the ordered schedule of horizontal scan rows each tier samples,
//! plus the rotated/rescaled grid transforms the fallback tiers run on. The
//! percentages and steps are tunables, not load-bearing behavior; they are
//! chosen so the cheap tiers cover the likeliest symbol placements first.

pub mod transform;

/// Horizontal scan rows expressed as a percentage sweep of image height
#[derive(Debug, Clone, Copy)]
pub struct RowSchedule {
    /// First row, percent of height
    pub start_pct: u32,
    /// Last row, percent of height (inclusive)
    pub end_pct: u32,
    /// Sweep step, percent of height
    pub step_pct: u32,
}

impl RowSchedule {
    /// Concrete row indices for a grid of the given height, in sweep order
    pub fn rows(&self, height: u32) -> Vec<u32> {
        if height == 0 || self.step_pct == 0 {
            return Vec::new();
        }
        let mut rows: Vec<u32> = (self.start_pct..=self.end_pct)
            .step_by(self.step_pct as usize)
            .map(|pct| height as u64 * pct as u64 / 100)
            .map(|y| y as u32)
            .filter(|&y| y < height)
            .collect();
        // Small heights collapse neighboring percentages onto one row; each
        // physical line may vote at most once.
        rows.dedup();
        rows
    }
}

/// Dense sweep over the vertical middle band, Otsu per line
pub const BASELINE: RowSchedule = RowSchedule {
    start_pct: 15,
    end_pct: 83,
    step_pct: 2,
};

/// Sparser sweep paired with the fixed threshold ladder
pub const WIDE_THRESHOLD: RowSchedule = RowSchedule {
    start_pct: 20,
    end_pct: 75,
    step_pct: 5,
};

/// Sweep applied to the 90-degree rotated grid
pub const ROTATED: RowSchedule = RowSchedule {
    start_pct: 20,
    end_pct: 80,
    step_pct: 3,
};

/// Sweep applied to each rescaled grid
pub const SCALED: RowSchedule = RowSchedule {
    start_pct: 20,
    end_pct: 80,
    step_pct: 5,
};

/// Fixed binarization cut-points the wide-threshold tier tries per line,
/// replacing Otsu for images whose global contrast defeats it
pub const FIXED_THRESHOLDS: [u8; 5] = [80, 100, 120, 140, 160];

/// Scale factors for the rescaled tier
pub const SCALE_FACTORS: [f32; 2] = [0.5, 2.0];
