//! Scan orchestration: the tier cascade and the vote tally
//!
//! Every tier feeds candidate lines through Otsu (or a fixed threshold
//! ladder) into the symbol decoder. Each successful decode casts one vote for
//! its digit string; the same string decoded from several independent lines
//! accumulates votes, which is the noise-rejection mechanism: a spurious
//! misread is unlikely to recur across lines. Later tiers only run while the
//! tally is still empty.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::decoder::decode_line;
use crate::models::{DecodeError, Ean13, GrayscaleGrid};
use crate::sampler::{self, RowSchedule, transform};
use crate::utils::binarization::{binarize_line, otsu_threshold};

/// Insertion-ordered vote tally; lives for one scan and is dropped with it
///
/// Only checksum-valid decodes ever enter. Kept as a flat vec: the tally is
/// tiny and the tie-break rule *is* insertion order.
struct VoteMap {
    votes: Vec<(Ean13, u32)>,
}

impl VoteMap {
    fn new() -> Self {
        Self { votes: Vec::new() }
    }

    fn record(&mut self, code: Ean13) {
        match self.votes.iter_mut().find(|(c, _)| *c == code) {
            Some(entry) => entry.1 += 1,
            None => self.votes.push((code, 1)),
        }
    }

    fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// Highest count wins; on equal counts the earliest-inserted entry does
    fn winner(self) -> Option<Ean13> {
        let mut best: Option<(Ean13, u32)> = None;
        for (code, count) in self.votes {
            match &best {
                Some((_, best_count)) if count <= *best_count => {}
                _ => best = Some((code, count)),
            }
        }
        best.map(|(code, _)| code)
    }
}

/// Configurable EAN-13 scanner
///
/// The default scanner runs the cascade sequentially with no time limit;
/// `parallel()` decodes each tier's lines on the rayon pool (votes still fold
/// in line order, so results are identical), and a time budget makes the
/// cascade stop early and return the best tally so far.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    parallel: bool,
    time_budget: Option<Duration>,
}

impl Scanner {
    /// Create a scanner with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner that decodes lines on the rayon thread pool
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            time_budget: None,
        }
    }

    /// Limit the total wall-clock time of one scan
    ///
    /// On expiry the scan returns the best vote so far, or `NoBarcodeFound`
    /// if nothing decoded yet, never a partial digit string.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Scan a grid for an EAN-13 symbol
    pub fn decode(&self, grid: &GrayscaleGrid) -> Result<Ean13, DecodeError> {
        if grid.is_empty() {
            return Err(DecodeError::NoBarcodeFound);
        }
        let mut votes = VoteMap::new();
        let deadline = self.time_budget.map(|budget| Instant::now() + budget);

        self.run_otsu_tier("baseline", grid, &sampler::BASELINE, deadline, &mut votes);

        if votes.is_empty() && !expired(deadline) {
            self.run_wide_threshold_tier(grid, deadline, &mut votes);
        }

        if votes.is_empty() && !expired(deadline) {
            let rotated = transform::rotate90(grid);
            self.run_otsu_tier("rotated", &rotated, &sampler::ROTATED, deadline, &mut votes);
        }

        if votes.is_empty() && !expired(deadline) {
            for &factor in &sampler::SCALE_FACTORS {
                if expired(deadline) {
                    break;
                }
                let scaled = transform::rescale(grid, factor);
                self.run_otsu_tier("scaled", &scaled, &sampler::SCALED, deadline, &mut votes);
            }
        }

        votes.winner().ok_or(DecodeError::NoBarcodeFound)
    }

    /// Run one Otsu-thresholded row sweep over `grid`
    fn run_otsu_tier(
        &self,
        tier: &'static str,
        grid: &GrayscaleGrid,
        schedule: &RowSchedule,
        deadline: Option<Instant>,
        votes: &mut VoteMap,
    ) {
        let rows = schedule.rows(grid.height());
        let decoded: Vec<Option<Ean13>> = if self.parallel {
            rows.par_iter()
                .map(|&y| {
                    if expired(deadline) {
                        return None;
                    }
                    decode_row_otsu(grid, y)
                })
                .collect()
        } else {
            rows.iter()
                .map(|&y| {
                    if expired(deadline) {
                        return None;
                    }
                    decode_row_otsu(grid, y)
                })
                .collect()
        };

        // Fold in submission order: vote counts and tie-breaks come out the
        // same whether the lines ran sequentially or on the pool
        let mut hits = 0u32;
        for code in decoded.into_iter().flatten() {
            trace!(tier, code = %code, "line decoded");
            votes.record(code);
            hits += 1;
        }
        debug!(tier, lines = rows.len(), hits, "tier complete");
    }

    /// Sparse row sweep against the fixed threshold ladder, for images whose
    /// global contrast defeats Otsu
    fn run_wide_threshold_tier(
        &self,
        grid: &GrayscaleGrid,
        deadline: Option<Instant>,
        votes: &mut VoteMap,
    ) {
        let rows = sampler::WIDE_THRESHOLD.rows(grid.height());
        let attempts: Vec<(u32, u8)> = rows
            .iter()
            .flat_map(|&y| sampler::FIXED_THRESHOLDS.iter().map(move |&t| (y, t)))
            .collect();

        let decoded: Vec<Option<Ean13>> = if self.parallel {
            attempts
                .par_iter()
                .map(|&(y, t)| {
                    if expired(deadline) {
                        return None;
                    }
                    decode_line(&binarize_line(grid.row(y), t))
                })
                .collect()
        } else {
            attempts
                .iter()
                .map(|&(y, t)| {
                    if expired(deadline) {
                        return None;
                    }
                    decode_line(&binarize_line(grid.row(y), t))
                })
                .collect()
        };

        let mut hits = 0u32;
        for code in decoded.into_iter().flatten() {
            trace!(tier = "wide_threshold", code = %code, "line decoded");
            votes.record(code);
            hits += 1;
        }
        debug!(
            tier = "wide_threshold",
            attempts = attempts.len(),
            hits,
            "tier complete"
        );
    }
}

fn decode_row_otsu(grid: &GrayscaleGrid, y: u32) -> Option<Ean13> {
    let row = grid.row(y);
    let threshold = otsu_threshold(row);
    decode_line(&binarize_line(row, threshold))
}

fn expired(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|d| Instant::now() >= d)
}

/// Scan a grayscale grid for a single EAN-13 barcode with default settings
///
/// Sequential, no time limit. The only failure is
/// [`DecodeError::NoBarcodeFound`]; garbled or degenerate input degrades to
/// it rather than erroring.
pub fn decode(grid: &GrayscaleGrid) -> Result<Ean13, DecodeError> {
    Scanner::new().decode(grid)
}
