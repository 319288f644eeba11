//! Core entropy calculation primitives.
//!
//! Shannon entropy and the byte histogram shared by the frequency analyzer
//! and the sliding window pass.

/// Calculates the Shannon entropy of a byte slice.
///
/// Returns a value between 0.0 and 8.0, where:
/// - 0.0 represents no randomness (empty input, or every byte identical)
/// - 8.0 represents maximum randomness (uniform distribution)
///
/// Only observed symbols contribute; absent byte values are skipped rather
/// than evaluating `log2(0)`.
#[inline]
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    Histogram::from_bytes(data).entropy()
}

/// Byte frequency histogram.
///
/// Supports incremental updates so a window can slide through data without
/// rebuilding the counts. Entropy is always derived from the integer counts,
/// so a slid histogram yields exactly the same value as a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [usize; 256],
    total: usize,
}

impl Histogram {
    /// Creates a new empty histogram.
    #[inline]
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    /// Creates a histogram from a byte slice.
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hist = Self::new();
        for &byte in data {
            hist.add(byte);
        }
        hist
    }

    /// Adds a byte to the histogram.
    #[inline]
    pub fn add(&mut self, byte: u8) {
        self.counts[byte as usize] += 1;
        self.total += 1;
    }

    /// Removes a byte from the histogram.
    #[inline]
    pub fn remove(&mut self, byte: u8) {
        let count = &mut self.counts[byte as usize];
        *count = count.saturating_sub(1);
        self.total = self.total.saturating_sub(1);
    }

    /// Slides the histogram window by removing old bytes and adding new ones.
    #[inline]
    pub fn slide(&mut self, old_bytes: &[u8], new_bytes: &[u8]) {
        debug_assert_eq!(
            old_bytes.len(),
            new_bytes.len(),
            "slide requires equal length slices"
        );

        for (&old, &new) in old_bytes.iter().zip(new_bytes.iter()) {
            if old != new {
                self.remove(old);
                self.add(new);
            }
        }
    }

    /// Calculates the entropy of the current histogram.
    #[inline]
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        let total = self.total as f64;
        let mut entropy = 0.0;

        for &count in &self.counts {
            if count == 0 {
                continue;
            }
            let p = (count as f64) / total;
            entropy -= p * p.log2();
        }

        entropy
    }

    /// Count for a single byte value.
    #[inline]
    pub fn count(&self, byte: u8) -> usize {
        self.counts[byte as usize]
    }

    /// All 256 counts in ascending byte-value order.
    #[inline]
    pub fn counts(&self) -> &[usize; 256] {
        &self.counts
    }

    /// Returns the total number of bytes in the histogram.
    #[inline]
    pub fn len(&self) -> usize {
        self.total
    }

    /// Returns true if the histogram is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}
