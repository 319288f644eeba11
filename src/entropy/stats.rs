//! Summary statistics over entropy series.

/// Statistical summary of entropy values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub mean: f64,
    /// Population standard deviation (divides by `n`).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Stats {
    /// Computes statistical summary from entropy values.
    ///
    /// Returns None if the input is empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let len = values.len() as f64;

        let sum: f64 = values.iter().sum();
        let mean = sum / len;

        let variance: f64 = values
            .iter()
            .map(|&x| {
                let diff = x - mean;
                diff * diff
            })
            .sum::<f64>()
            / len;
        let std_dev = variance.sqrt();

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Stats {
            mean,
            std_dev,
            min,
            max,
        })
    }

    /// Collapsed summary of a single observation.
    pub fn single(value: f64) -> Self {
        Stats {
            mean: value,
            std_dev: 0.0,
            min: value,
            max: value,
        }
    }

    /// `[mean, std_dev, min, max]`, the order used in feature vectors.
    pub fn to_array(self) -> [f64; 4] {
        [self.mean, self.std_dev, self.min, self.max]
    }
}
