//! Compression, sliding-window entropy and hashed bigram features.

use crate::entropy::{analyze_windows, shannon_entropy, Stats, WindowConfig};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{self, Write};
use tracing::error;

/// zlib compression level used for `compression_ratio`.
///
/// Ratios are part of the trained feature distribution; changing the level
/// requires a new feature-set version.
pub const COMPRESSION_LEVEL: u32 = 6;

/// Default sliding window parameters.
pub const SLIDING_WINDOW_SIZE: usize = 256;
pub const SLIDING_WINDOW_STEP: usize = 64;

/// Default number of hashed bigram buckets.
pub const BIGRAM_BINS: usize = 512;

/// zlib-compressed length of `data` at [`COMPRESSION_LEVEL`].
pub fn compressed_len(data: &[u8]) -> io::Result<usize> {
    let mut encoder = ZlibEncoder::new(
        Vec::with_capacity(data.len() / 2 + 64),
        Compression::new(COMPRESSION_LEVEL),
    );
    encoder.write_all(data)?;
    Ok(encoder.finish()?.len())
}

/// `compressed_len / len`; 0.0 for an empty buffer.
///
/// Ciphertext sits near (or slightly above) 1.0; structured plaintext
/// leaking through a weak mode compresses well below it.
///
/// The `Err` arm cannot be reached: [`compressed_len`] writes into a
/// `Vec<u8>`, whose `Write` impl never fails, and the deflate stream only
/// reports errors from its sink. The arm exists because the encoder API is
/// `io::Result`; it logs at `error` and reports the incompressible ratio.
pub fn compression_ratio(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    match compressed_len(data) {
        Ok(len) => len as f64 / data.len() as f64,
        Err(e) => {
            error!(error = %e, "in-memory zlib compression failed");
            1.0
        }
    }
}

/// `[mean, stddev, min, max]` of per-window entropy.
///
/// Buffers no longer than `window_size` (and parameter choices that fit no
/// window at all) collapse to the whole-buffer entropy with zero spread.
pub fn sliding_entropy_stats(data: &[u8], window_size: usize, step: usize) -> [f64; 4] {
    if data.len() <= window_size {
        return Stats::single(shannon_entropy(data)).to_array();
    }
    let config = WindowConfig {
        window_size,
        step_size: step,
    };
    analyze_windows(data, &config)
        .stats()
        .unwrap_or_else(|| Stats::single(shannon_entropy(data)))
        .to_array()
}

/// Adjacent byte pairs hashed into `bins` buckets, normalized by pair count.
///
/// Pair `(a, b)` lands in bucket `(a * 256 + b) % bins`. Buffers shorter
/// than two bytes yield all zeros.
pub fn hashed_bigrams(data: &[u8], bins: usize) -> Vec<f64> {
    let mut out = vec![0.0; bins];
    if data.len() < 2 || bins == 0 {
        return out;
    }

    let mut counts = vec![0usize; bins];
    for pair in data.windows(2) {
        let idx = (pair[0] as usize * 256 + pair[1] as usize) % bins;
        counts[idx] += 1;
    }

    let total = (data.len() - 1) as f64;
    for (slot, &count) in out.iter_mut().zip(counts.iter()) {
        *slot = count as f64 / total;
    }
    out
}
