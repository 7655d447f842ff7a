// Self-check: synthesize EAN-13 symbols, embed them in grids, decode them back
use ean_scan::{decode, encoder};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let codes = [
        "6901234567892",
        "8901234567890",
        "4006381333931",
        "5012345678900",
    ];

    let mut success = 0;
    for text in &codes {
        let bits = match encoder::encode_bits(text) {
            Some(bits) => bits,
            None => {
                println!("SKIP: {} (bad check digit)", text);
                continue;
            }
        };

        for module_px in [1usize, 2, 3] {
            let row = encoder::render_row(&bits, module_px, 10 * module_px);
            let width = row.len() as u32;
            let grid = encoder::embed_in_grid(width, 120, &row, 0, 51)
                .expect("grid dimensions match buffer");

            match decode(&grid) {
                Ok(code) if code.as_str() == *text => {
                    success += 1;
                    println!("OK: {} at {}px/module", text, module_px);
                }
                Ok(code) => println!("MISMATCH: {} decoded as {}", text, code),
                Err(err) => println!("FAIL: {} at {}px/module -> {}", text, module_px, err),
            }
        }
    }

    println!("\nResult: {}/{}", success, codes.len() * 3);
}
