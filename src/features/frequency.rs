//! Byte distribution statistics: histogram, chi-square and index of
//! coincidence.

use crate::entropy::Histogram;

/// Number of byte-frequency bins; one per byte value.
pub const BYTE_BINS: usize = 256;

/// Relative frequency of every byte value, in ascending value order.
///
/// All zeros for an empty buffer.
pub fn byte_frequency(data: &[u8]) -> [f64; BYTE_BINS] {
    let mut freq = [0.0; BYTE_BINS];
    if data.is_empty() {
        return freq;
    }
    let hist = Histogram::from_bytes(data);
    let len = data.len() as f64;
    for (slot, &count) in freq.iter_mut().zip(hist.counts().iter()) {
        *slot = count as f64 / len;
    }
    freq
}

/// Chi-square statistic against a uniform byte distribution.
///
/// Expected count per bin is `len / 256`. Defined as 0.0 for an empty buffer.
pub fn chi_square_statistic(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let expected = data.len() as f64 / BYTE_BINS as f64;
    Histogram::from_bytes(data)
        .counts()
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Probability that two bytes drawn without replacement are equal.
///
/// Returns 0.0 when the buffer holds fewer than two bytes.
pub fn index_of_coincidence(data: &[u8]) -> f64 {
    let n = data.len() as u128;
    if n <= 1 {
        return 0.0;
    }
    // exact integer sums; only the final division rounds
    let coincidences: u128 = Histogram::from_bytes(data)
        .counts()
        .iter()
        .map(|&f| {
            let f = f as u128;
            f * f.saturating_sub(1)
        })
        .sum();
    coincidences as f64 / (n * (n - 1)) as f64
}
