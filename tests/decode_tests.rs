//! End-to-end scan tests over synthetic grids
//!
//! Every fixture is synthesized through the encoder, so these tests pin the
//! whole pipeline: row schedules, thresholding, the symbology state machine,
//! the tier cascade, and the vote tally.

use std::time::Duration;

use ean_scan::validate::{BarcodeKind, validate_barcode};
use ean_scan::{DecodeError, GrayscaleGrid, Scanner, decode, encoder};

const CODE_A: &str = "6901234567892";
const CODE_B: &str = "8901234567890";

/// All-bright grid with `row_pixels` stamped across rows `y0..y1`
fn grid_with_band(width: u32, height: u32, row_pixels: &[u8], y0: u32, y1: u32) -> GrayscaleGrid {
    let mut pixels = vec![255u8; width as usize * height as usize];
    for y in y0..y1.min(height) {
        let base = y as usize * width as usize;
        for (i, &p) in row_pixels.iter().enumerate() {
            if i < width as usize {
                pixels[base + i] = p;
            }
        }
    }
    GrayscaleGrid::new(width, height, pixels).unwrap()
}

#[test]
fn test_embedded_symbol_decodes() {
    // 3px modules fit a 300-wide grid; the symbol band straddles mid-height
    let bits = encoder::encode_bits(CODE_A).unwrap();
    let row = encoder::render_row(&bits, 3, 7);
    assert!(row.len() <= 300);

    let grid = grid_with_band(300, 200, &row, 95, 110);
    assert_eq!(decode(&grid).unwrap().as_str(), CODE_A);
}

#[test]
fn test_single_pixel_modules_decode() {
    let bits = encoder::encode_bits(CODE_B).unwrap();
    let row = encoder::render_row(&bits, 1, 20);
    let grid = grid_with_band(row.len() as u32, 100, &row, 51, 52);
    assert_eq!(decode(&grid).unwrap().as_str(), CODE_B);
}

#[test]
fn test_vertical_symbol_found_by_rotated_tier() {
    // Symbol written along one column, bottom-up, with no horizontal
    // presence: only the rotated tier can recover it
    let bits = encoder::encode_bits(CODE_A).unwrap();
    let row = encoder::render_row(&bits, 4, 20);
    let (width, height) = (200u32, 460u32);
    assert!(row.len() <= height as usize);

    let mut pixels = vec![255u8; width as usize * height as usize];
    let column = 100u32;
    for (i, &p) in row.iter().enumerate() {
        let y = height - 1 - i as u32;
        pixels[y as usize * width as usize + column as usize] = p;
    }
    let grid = GrayscaleGrid::new(width, height, pixels).unwrap();

    assert_eq!(decode(&grid).unwrap().as_str(), CODE_A);
}

#[test]
fn test_noise_grid_finds_nothing() {
    // Deterministic LCG noise, no embedded symbol
    let mut state = 0x2545_f491u32;
    let pixels: Vec<u8> = (0..50 * 50)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .collect();
    let grid = GrayscaleGrid::new(50, 50, pixels).unwrap();

    assert_eq!(decode(&grid), Err(DecodeError::NoBarcodeFound));
}

#[test]
fn test_corrupted_digit_group_finds_nothing() {
    // One flipped module in a left digit group: no table can match it
    let mut bits = encoder::encode_bits(CODE_A).unwrap();
    bits[5] ^= 1;
    let row = encoder::render_row(&bits, 1, 20);
    let grid = grid_with_band(row.len() as u32, 100, &row, 51, 52);

    assert_eq!(decode(&grid), Err(DecodeError::NoBarcodeFound));
}

#[test]
fn test_low_contrast_symbol_needs_threshold_ladder() {
    // Bars at 110/130 next to a 255 background: per-line Otsu splits at the
    // background and flattens the symbol, so only the fixed 120 threshold of
    // the wide tier resolves it
    let bits = encoder::encode_bits(CODE_B).unwrap();
    let row: Vec<u8> = encoder::render_row(&bits, 1, 20)
        .into_iter()
        .map(|p| if p == 0 { 110 } else { 130 })
        .collect();
    // Row 100 of a 200-tall grid is sampled by the wide tier but not the
    // baseline tier
    let grid = grid_with_band(300, 200, &row, 100, 101);

    assert_eq!(decode(&grid).unwrap().as_str(), CODE_B);
}

#[test]
fn test_fractional_modules_need_rescale_tier() {
    // 1.5px modules defeat integer module sampling at native resolution; the
    // 2.0 upscale makes them exact 3px modules
    let bits = encoder::encode_bits(CODE_A).unwrap();
    let row = encoder::render_row_fractional(&bits, 1.5, 20);
    let grid = grid_with_band(row.len() as u32, 200, &row, 100, 101);

    assert_eq!(decode(&grid).unwrap().as_str(), CODE_A);
}

#[test]
fn test_tie_breaks_to_earlier_line() {
    // Two different symbols, one vote each: the first-scanned row wins
    let bits_a = encoder::encode_bits(CODE_A).unwrap();
    let bits_b = encoder::encode_bits(CODE_B).unwrap();
    let row_a = encoder::render_row(&bits_a, 1, 20);
    let row_b = encoder::render_row(&bits_b, 1, 20);
    let width = row_a.len().max(row_b.len()) as u32;

    let mut pixels = vec![255u8; width as usize * 100];
    for (i, &p) in row_a.iter().enumerate() {
        pixels[15 * width as usize + i] = p;
    }
    for (i, &p) in row_b.iter().enumerate() {
        pixels[17 * width as usize + i] = p;
    }
    let grid = GrayscaleGrid::new(width, 100, pixels).unwrap();

    assert_eq!(decode(&grid).unwrap().as_str(), CODE_A);
}

#[test]
fn test_more_votes_beat_earlier_insertion() {
    // A appears on one scanned row, B on many: B's count wins even though A
    // entered the tally first
    let bits_a = encoder::encode_bits(CODE_A).unwrap();
    let bits_b = encoder::encode_bits(CODE_B).unwrap();
    let row_a = encoder::render_row(&bits_a, 1, 20);
    let row_b = encoder::render_row(&bits_b, 1, 20);
    let width = row_a.len().max(row_b.len()) as u32;

    let mut pixels = vec![255u8; width as usize * 100];
    for (i, &p) in row_a.iter().enumerate() {
        pixels[15 * width as usize + i] = p;
    }
    for y in 17..40usize {
        for (i, &p) in row_b.iter().enumerate() {
            pixels[y * width as usize + i] = p;
        }
    }
    let grid = GrayscaleGrid::new(width, 100, pixels).unwrap();

    assert_eq!(decode(&grid).unwrap().as_str(), CODE_B);
}

#[test]
fn test_zero_time_budget_degrades_to_not_found() {
    let bits = encoder::encode_bits(CODE_A).unwrap();
    let row = encoder::render_row(&bits, 1, 20);
    let grid = grid_with_band(row.len() as u32, 100, &row, 51, 52);

    let scanner = Scanner::new().with_time_budget(Duration::ZERO);
    assert_eq!(scanner.decode(&grid), Err(DecodeError::NoBarcodeFound));
}

#[test]
fn test_expiring_budget_returns_votes_already_collected() {
    // The band covers every baseline row, so the first sampled line already
    // casts a vote; whether or not the budget runs out partway through the
    // sweep, the scan must return that complete code, never a partial one
    let bits = encoder::encode_bits(CODE_A).unwrap();
    let row = encoder::render_row(&bits, 1, 20);
    let grid = grid_with_band(row.len() as u32, 100, &row, 15, 84);

    let scanner = Scanner::new().with_time_budget(Duration::from_millis(50));
    assert_eq!(scanner.decode(&grid).unwrap().as_str(), CODE_A);
}

#[test]
fn test_parallel_matches_sequential() {
    let bits = encoder::encode_bits(CODE_A).unwrap();
    let row = encoder::render_row(&bits, 3, 7);
    let grid = grid_with_band(300, 200, &row, 95, 110);

    let sequential = Scanner::new().decode(&grid);
    let parallel = Scanner::parallel().decode(&grid);
    assert_eq!(sequential, parallel);
    assert_eq!(sequential.unwrap().as_str(), CODE_A);
}

#[test]
fn test_decoded_value_passes_validation() {
    let bits = encoder::encode_bits(CODE_B).unwrap();
    let row = encoder::render_row(&bits, 1, 20);
    let grid = grid_with_band(row.len() as u32, 100, &row, 51, 52);

    let code = decode(&grid).unwrap();
    assert_eq!(validate_barcode(code.as_str()), Ok(BarcodeKind::Ean13));
    assert!(code.is_indian());
    assert_eq!(code.country(), Some("India"));
}

#[test]
fn test_round_trip_random_valid_codes() {
    // A spread of payloads over all ten parity rows survives the full
    // grid-level round trip
    let mut state = 0x1234_5678u32;
    for _ in 0..10 {
        let mut payload = [0u8; 12];
        for d in payload.iter_mut() {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            *d = ((state >> 16) % 10) as u8;
        }
        let digits = encoder::with_check_digit(&payload);
        let text: String = digits.iter().map(|d| (b'0' + d) as char).collect();

        let bits = encoder::encode_bits(&text).unwrap();
        let row = encoder::render_row(&bits, 2, 10);
        let grid = grid_with_band(row.len() as u32, 100, &row, 40, 60);

        assert_eq!(decode(&grid).unwrap().as_str(), text, "code {}", text);
    }
}
