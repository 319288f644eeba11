//! Sliding window entropy analysis.
//!
//! Computes the entropy of every complete window of `window_size` bytes,
//! starting at offsets `0, step, 2*step, ...`. Trailing bytes that do not
//! fill a whole window are not visited.

use crate::entropy::core::Histogram;
use crate::entropy::stats::Stats;

/// Configuration for sliding window entropy analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Size of each window in bytes.
    pub window_size: usize,
    /// Step size between windows in bytes.
    pub step_size: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window_size: 256,
            step_size: 64,
        }
    }
}

/// Result of sliding window entropy analysis.
#[derive(Debug, Clone)]
pub struct WindowAnalysis {
    /// Entropy values for each window, in offset order.
    pub entropies: Vec<f64>,
    pub window_size: usize,
    pub step_size: usize,
}

impl WindowAnalysis {
    /// Returns the number of windows analyzed.
    pub fn len(&self) -> usize {
        self.entropies.len()
    }

    /// Returns true if no windows were analyzed.
    pub fn is_empty(&self) -> bool {
        self.entropies.is_empty()
    }

    /// Mean / population stddev / min / max of the series.
    pub fn stats(&self) -> Option<Stats> {
        Stats::from_values(&self.entropies)
    }
}

/// Performs sliding window entropy analysis on data.
///
/// The histogram is updated incrementally as the window slides; when the
/// step exceeds the window the histogram is rebuilt instead.
pub fn analyze_windows(data: &[u8], config: &WindowConfig) -> WindowAnalysis {
    let window_size = config.window_size;
    let step_size = config.step_size;
    let mut entropies = Vec::new();

    if window_size == 0 || step_size == 0 || data.len() < window_size {
        return WindowAnalysis {
            entropies,
            window_size,
            step_size,
        };
    }

    entropies.reserve(1 + (data.len() - window_size) / step_size);
    let mut histogram = Histogram::from_bytes(&data[..window_size]);
    let mut position = 0;

    loop {
        entropies.push(histogram.entropy());

        let next = position + step_size;
        if next + window_size > data.len() {
            break;
        }

        if step_size < window_size {
            histogram.slide(
                &data[position..next],
                &data[position + window_size..next + window_size],
            );
        } else {
            histogram = Histogram::from_bytes(&data[next..next + window_size]);
        }
        position = next;
    }

    WindowAnalysis {
        entropies,
        window_size,
        step_size,
    }
}
