//! Prediction decision layer.
//!
//! Turns a class distribution into the public answer: top-k ranking, a
//! confidence threshold, and the `Unknown` fallback when the best class does
//! not clear it. Pure function of (probabilities, threshold, k).

use crate::error::{CipherprintError, Result};
use crate::inference::classifier::ClassProbabilities;
use serde::{Deserialize, Serialize};

/// Label reported when the best probability is below the threshold.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Default minimum probability for a confident prediction.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.55;

/// Default number of ranked alternatives to report.
pub const DEFAULT_TOP_K: usize = 2;

/// Decision parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Minimum best-class probability, in [0, 1].
    pub confidence_threshold: f64,
    /// Number of ranked predictions to report, at least 1.
    pub top_k: usize,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl DecisionConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(CipherprintError::InvalidConfig(format!(
                "confidence_threshold must be in [0, 1], got {}",
                self.confidence_threshold
            )));
        }
        if self.top_k == 0 {
            return Err(CipherprintError::InvalidConfig(
                "top_k must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

/// One ranked alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPrediction {
    pub label: String,
    /// Probability rounded to two decimals.
    pub confidence: f64,
}

/// Final answer for one ciphertext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Best label, or [`UNKNOWN_LABEL`] when uncertain.
    #[serde(rename = "predicted_algorithm")]
    pub predicted_label: String,
    /// Best probability rounded to two decimals, reported even when uncertain.
    pub confidence: f64,
    #[serde(rename = "top_predictions")]
    pub top_k: Vec<RankedPrediction>,
    pub is_uncertain: bool,
    /// Threshold the decision was made against.
    pub threshold: f64,
}

impl PredictionResult {
    /// Serialize to JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| CipherprintError::Serialization(format!("JSON serialization error: {}", e)))
    }

    /// Deserialize from JSON string.
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).map_err(|e| {
            CipherprintError::Serialization(format!("JSON deserialization error: {}", e))
        })
    }
}

/// Round to two decimals.
///
/// Rounds the exact binary value of `value`, ties to even, so `0.125`
/// becomes `0.12` and `0.015` (stored just below 0.015) becomes `0.01`.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    if exponent >= 0 {
        return value;
    }

    // value * 100 == scaled / 2^shift exactly
    let scaled = mantissa as u128 * 100;
    let shift = exponent.unsigned_abs();
    let hundredths = if shift > 64 {
        // scaled < 2^60, so the quotient is below one half
        0
    } else {
        let quotient = scaled >> shift;
        let remainder = scaled & ((1u128 << shift) - 1);
        let half = 1u128 << (shift - 1);
        if remainder > half || (remainder == half && quotient & 1 == 1) {
            quotient + 1
        } else {
            quotient
        }
    };
    (hundredths as f64 / 100.0).copysign(value)
}

/// Apply ranking and the confidence threshold.
///
/// Labels are ordered by descending probability; equal probabilities keep
/// the classifier's native order. The threshold is compared against the
/// unrounded best probability.
pub fn decide(probabilities: &ClassProbabilities, config: &DecisionConfig) -> Result<PredictionResult> {
    config.validate()?;

    let mut ranked: Vec<_> = probabilities.iter().collect();
    // sort_by is stable, so ties stay in native label order
    ranked.sort_by(|a, b| b.probability.total_cmp(&a.probability));

    let best = ranked.first().copied().ok_or_else(|| {
        CipherprintError::InvalidProbabilities("classifier returned no classes".into())
    })?;

    let top_k = ranked
        .iter()
        .take(config.top_k)
        .map(|p| RankedPrediction {
            label: p.label.clone(),
            confidence: round2(p.probability),
        })
        .collect();

    let is_uncertain = best.probability < config.confidence_threshold;
    let predicted_label = if is_uncertain {
        UNKNOWN_LABEL.to_string()
    } else {
        best.label.clone()
    };

    Ok(PredictionResult {
        predicted_label,
        confidence: round2(best.probability),
        top_k,
        is_uncertain,
        threshold: config.confidence_threshold,
    })
}
