//! Length and block-repetition features.
//!
//! Block ciphers in ECB-like modes repeat whole blocks when the plaintext
//! repeats; stream ciphers never do. Lengths leak padding granularity.

use std::collections::HashSet;

/// Block sizes probed by the extended feature set, in layout order.
pub const REPETITION_BLOCK_SIZES: [usize; 3] = [8, 16, 32];

/// `[length, length mod 8, length mod 16]` as floats.
pub fn length_features(data: &[u8]) -> [f64; 3] {
    let len = data.len();
    [len as f64, (len % 8) as f64, (len % 16) as f64]
}

/// Fraction of full `block_size` chunks that duplicate an earlier chunk.
///
/// The buffer is split into consecutive non-overlapping chunks; a trailing
/// partial chunk is dropped. Returns `1 - distinct / total`, or 0.0 when no
/// full chunk exists (including `block_size == 0`).
pub fn block_repetition_ratio(data: &[u8], block_size: usize) -> f64 {
    if block_size == 0 || data.len() < block_size {
        return 0.0;
    }
    let chunks = data.chunks_exact(block_size);
    let total = chunks.len();
    if total == 0 {
        return 0.0;
    }
    let distinct: HashSet<&[u8]> = chunks.collect();
    1.0 - (distinct.len() as f64 / total as f64)
}
