/// Calculate Otsu's optimal threshold for one line of intensities
///
/// Builds a 256-bin histogram and sweeps every candidate threshold, keeping
/// running background sums so the whole pass is O(samples + 256). Returns the
/// threshold maximizing between-class variance.
///
/// Degenerate inputs never fail: an empty line yields 128, an
/// all-identical line yields that single intensity.
pub fn otsu_threshold(samples: &[u8]) -> u8 {
    if samples.is_empty() {
        return 128;
    }

    let mut histogram = [0u32; 256];
    for &p in samples {
        histogram[p as usize] += 1;
    }

    let total = samples.len() as f64;
    let sum_total: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut sum_bg = 0.0f64;
    let mut weight_bg = 0u32;
    let mut max_variance = 0.0f64;
    let mut threshold = samples[0];

    let count = samples.len() as u32;
    for t in 0..256 {
        // Background is every bin strictly below t, matching the p < t cut
        // in binarize_line; bin t itself joins after the comparison.
        let weight_fg = count - weight_bg;
        if weight_bg > 0 && weight_fg > 0 {
            let mean_bg = sum_bg / weight_bg as f64;
            let mean_fg = (sum_total - sum_bg) / weight_fg as f64;
            let w_bg = weight_bg as f64 / total;
            let w_fg = weight_fg as f64 / total;
            let variance = w_bg * w_fg * (mean_bg - mean_fg) * (mean_bg - mean_fg);

            if variance > max_variance {
                max_variance = variance;
                threshold = t as u8;
            }
        }

        weight_bg += histogram[t];
        sum_bg += t as f64 * histogram[t] as f64;
        if weight_bg == count {
            break;
        }
    }

    threshold
}

/// Binarize one line of intensities against a threshold
///
/// bit = 0 where the sample is below the threshold, 1 otherwise. Output
/// length always equals input length.
pub fn binarize_line(samples: &[u8], threshold: u8) -> Vec<u8> {
    samples
        .iter()
        .map(|&p| if p < threshold { 0 } else { 1 })
        .collect()
}
