use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ean_scan::{GrayscaleGrid, Scanner, encoder};

fn symbol_grid() -> GrayscaleGrid {
    let bits = encoder::encode_bits("6901234567892").unwrap();
    let row = encoder::render_row(&bits, 3, 7);
    let width = 300u32;
    let mut pixels = vec![255u8; width as usize * 200];
    for y in 95..110usize {
        for (i, &p) in row.iter().enumerate() {
            pixels[y * width as usize + i] = p;
        }
    }
    GrayscaleGrid::new(width, 200, pixels).unwrap()
}

fn noise_grid() -> GrayscaleGrid {
    let mut state = 0x2545_f491u32;
    let pixels: Vec<u8> = (0..640 * 480)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .collect();
    GrayscaleGrid::new(640, 480, pixels).unwrap()
}

fn bench_decode(c: &mut Criterion) {
    let symbol = symbol_grid();
    let noise = noise_grid();
    let sequential = Scanner::new();
    let parallel = Scanner::parallel();

    c.bench_function("decode_symbol_300x200", |b| {
        b.iter(|| sequential.decode(black_box(&symbol)))
    });

    c.bench_function("decode_symbol_300x200_parallel", |b| {
        b.iter(|| parallel.decode(black_box(&symbol)))
    });

    // Exhausts the full tier cascade without finding anything
    c.bench_function("decode_noise_640x480", |b| {
        b.iter(|| sequential.decode(black_box(&noise)))
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
