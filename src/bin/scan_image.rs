// Decode an EAN-13 barcode from an image file
use std::process::ExitCode;

use ean_scan::utils::grayscale::rgb_to_grayscale_parallel;
use ean_scan::{GrayscaleGrid, Scanner};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: scan_image <image-file> [--parallel]");
        return ExitCode::from(2);
    };
    let parallel = args.any(|a| a == "--parallel");

    let img = match image::open(&path) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("cannot open {}: {}", path, err);
            return ExitCode::from(2);
        }
    };

    let rgb_img = img.to_rgb8();
    let (width, height) = (rgb_img.width(), rgb_img.height());
    let rgb_bytes: Vec<u8> = rgb_img.into_raw();
    let gray = rgb_to_grayscale_parallel(&rgb_bytes, width as usize, height as usize);

    let grid = match GrayscaleGrid::new(width, height, gray) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("bad pixel buffer: {}", err);
            return ExitCode::from(2);
        }
    };

    let scanner = if parallel {
        Scanner::parallel()
    } else {
        Scanner::new()
    };

    match scanner.decode(&grid) {
        Ok(code) => {
            println!("OK: {} -> {}", path, code);
            if let Some(country) = code.country() {
                println!("  GS1 prefix {} ({})", code.gs1_prefix(), country);
            }
            if code.is_indian() {
                println!("  Indian retail barcode");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            // The caller's fallback is manual barcode entry
            println!("FAIL: {} -> {}", path, err);
            ExitCode::FAILURE
        }
    }
}
