//! EAN-13 symbol decoder over a single binarized line
//!
//! One canonical set of pattern tables serves every scan strategy. A digit is
//! a fixed 7-module pattern from one of three code tables: `L` and `G` on the
//! left half (their mix encodes the otherwise-unwritten first digit), `R` on
//! the right half. The symbol is framed by a 3-module start guard, a 5-module
//! middle guard, and a 3-module end guard.
//!
//! Bits follow the binarization convention of
//! [`crate::utils::binarization::binarize_line`]: 1 means the sample was at
//! or above the threshold. A module may span several pixels; the decoder
//! sweeps candidate module widths and samples each module at its center, so
//! width 1 degenerates to plain per-bit matching.

use crate::models::Ean13;

/// Modules the decoder reads from a candidate start. A full symbol is 95
/// modules (3 start guard + 42 left + 5 middle guard + 42 right + 3 end
/// guard), but the end guard is never validated.
const DECODED_MODULES: usize = 92;

/// Which code table matched a left-half digit group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Odd-parity table
    L,
    /// Even-parity table
    G,
}

/// Left odd-parity digit patterns
pub const L_PATTERNS: [[u8; 7]; 10] = [
    [0, 0, 0, 1, 1, 0, 1],
    [0, 0, 1, 1, 0, 0, 1],
    [0, 0, 1, 0, 0, 1, 1],
    [0, 1, 1, 1, 1, 0, 1],
    [0, 1, 0, 0, 0, 1, 1],
    [0, 1, 1, 0, 0, 0, 1],
    [0, 1, 0, 1, 1, 1, 1],
    [0, 1, 1, 1, 0, 1, 1],
    [0, 1, 1, 0, 1, 1, 1],
    [0, 0, 0, 1, 0, 1, 1],
];

/// Left even-parity digit patterns
pub const G_PATTERNS: [[u8; 7]; 10] = [
    [0, 1, 0, 0, 1, 1, 1],
    [0, 1, 1, 0, 0, 1, 1],
    [0, 0, 1, 1, 0, 1, 1],
    [0, 1, 0, 0, 0, 0, 1],
    [0, 0, 1, 1, 1, 0, 1],
    [0, 1, 1, 1, 0, 0, 1],
    [0, 0, 0, 0, 1, 0, 1],
    [0, 0, 1, 0, 0, 0, 1],
    [0, 0, 0, 1, 0, 0, 1],
    [0, 0, 1, 0, 1, 1, 1],
];

/// Right-half digit patterns
pub const R_PATTERNS: [[u8; 7]; 10] = [
    [1, 1, 1, 0, 0, 1, 0],
    [1, 1, 0, 0, 1, 1, 0],
    [1, 1, 0, 1, 1, 0, 0],
    [1, 0, 0, 0, 0, 1, 0],
    [1, 0, 1, 1, 1, 0, 0],
    [1, 0, 0, 1, 1, 1, 0],
    [1, 0, 1, 0, 0, 0, 0],
    [1, 0, 0, 0, 1, 0, 0],
    [1, 0, 0, 1, 0, 0, 0],
    [1, 1, 1, 0, 1, 0, 0],
];

/// Left-half parity sequence implied by each first digit
pub const PARITY_PATTERNS: [[Parity; 6]; 10] = {
    use Parity::{G, L};
    [
        [L, L, L, L, L, L],
        [L, L, G, L, G, G],
        [L, L, G, G, L, G],
        [L, L, G, G, G, L],
        [L, G, L, L, G, G],
        [L, G, G, L, L, G],
        [L, G, G, G, L, L],
        [L, G, L, G, L, G],
        [L, G, L, G, G, L],
        [L, G, G, L, G, L],
    ]
};

/// Attempt to decode one EAN-13 symbol from a binarized line
///
/// Module widths from 1 pixel up to whatever the line could hold are swept in
/// order; within each width, every offset that looks like a start guard
/// (`1,0,1` modules) is tried as a candidate symbol origin, left to right.
/// The first candidate whose digits survive the checksum wins. A line with no
/// surviving candidate yields `None`, an expected negative outcome, not an
/// error. Malformed input can only disqualify candidates, never panic.
pub fn decode_line(bits: &[u8]) -> Option<Ean13> {
    let max_width = bits.len() / DECODED_MODULES;
    for module_px in 1..=max_width {
        if let Some(code) = decode_line_at_width(bits, module_px) {
            return Some(code);
        }
    }
    None
}

fn decode_line_at_width(bits: &[u8], module_px: usize) -> Option<Ean13> {
    let span = DECODED_MODULES * module_px;
    if bits.len() < span {
        return None;
    }
    for start in 0..=bits.len() - span {
        if module_at(bits, start, module_px, 0) == Some(1)
            && module_at(bits, start, module_px, 1) == Some(0)
            && module_at(bits, start, module_px, 2) == Some(1)
        {
            if let Some(digits) = decode_at(bits, start, module_px) {
                return Some(Ean13::from_digits(digits));
            }
        }
    }
    None
}

/// Sample symbol module `index` at the center of its pixel span
fn module_at(bits: &[u8], start: usize, module_px: usize, index: usize) -> Option<u8> {
    bits.get(start + index * module_px + module_px / 2).copied()
}

/// Decode the symbol assumed to start at `start`; `None` disqualifies the
/// candidate without aborting the caller's scan.
fn decode_at(bits: &[u8], start: usize, module_px: usize) -> Option<[u8; 13]> {
    // Module 0 is the first start-guard module; digit groups begin at 3
    let mut module = 3;

    let mut left = [0u8; 6];
    let mut parity = [Parity::L; 6];
    for d in 0..6 {
        let group = read_group(bits, start, module_px, module)?;
        let (digit, p) = match_left(&group)?;
        left[d] = digit;
        parity[d] = p;
        module += 7;
    }

    // Middle guard is skipped by position only; its modules are not checked
    module += 5;

    let mut right = [0u8; 6];
    for d in 0..6 {
        let group = read_group(bits, start, module_px, module)?;
        right[d] = match_table(&group, &R_PATTERNS)?;
        module += 7;
    }

    let first = first_digit_for(&parity)?;

    let mut digits = [0u8; 13];
    digits[0] = first;
    digits[1..7].copy_from_slice(&left);
    digits[7..13].copy_from_slice(&right);

    if checksum_valid(&digits) { Some(digits) } else { None }
}

fn read_group(bits: &[u8], start: usize, module_px: usize, module: usize) -> Option<[u8; 7]> {
    let mut group = [0u8; 7];
    for (k, slot) in group.iter_mut().enumerate() {
        *slot = module_at(bits, start, module_px, module + k)?;
    }
    Some(group)
}

/// Match a left-half group against both the L and G tables
///
/// L patterns carry an odd number of set bits and G patterns an even number,
/// so at most one table can match.
fn match_left(group: &[u8; 7]) -> Option<(u8, Parity)> {
    if let Some(d) = match_table(group, &L_PATTERNS) {
        return Some((d, Parity::L));
    }
    if let Some(d) = match_table(group, &G_PATTERNS) {
        return Some((d, Parity::G));
    }
    None
}

fn match_table(group: &[u8; 7], table: &[[u8; 7]; 10]) -> Option<u8> {
    table
        .iter()
        .position(|pattern| group == pattern)
        .map(|d| d as u8)
}

fn first_digit_for(parity: &[Parity; 6]) -> Option<u8> {
    PARITY_PATTERNS
        .iter()
        .position(|p| p == parity)
        .map(|d| d as u8)
}

/// EAN-13 check digit over the first 12 digits
pub fn checksum_digit(digits: &[u8]) -> u8 {
    let total: u32 = digits
        .iter()
        .take(12)
        .enumerate()
        .map(|(i, &d)| d as u32 * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    ((10 - total % 10) % 10) as u8
}

/// Whether the 13th digit is the correct check digit for the first 12
pub fn checksum_valid(digits: &[u8; 13]) -> bool {
    checksum_digit(digits) == digits[12]
}
