//! Classifier capability and its probability output.
//!
//! The trained model lives outside this crate. Anything that can report an
//! input width and turn a [`FeatureVector`] into class probabilities can be
//! plugged in: an ensemble behind FFI, a remote service, a stub in tests.

use crate::error::{CipherprintError, Result};
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Allowed deviation of a probability sum from 1.0.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// External probabilistic classifier.
pub trait Classifier: Send + Sync {
    /// Input width the model was trained on.
    fn feature_count(&self) -> usize;

    /// Class probabilities for one vector, in the model's native label order.
    fn predict_proba(&self, features: &FeatureVector) -> anyhow::Result<ClassProbabilities>;
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn feature_count(&self) -> usize {
        (**self).feature_count()
    }

    fn predict_proba(&self, features: &FeatureVector) -> anyhow::Result<ClassProbabilities> {
        (**self).predict_proba(features)
    }
}

/// One label with its probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    pub label: String,
    pub probability: f64,
}

/// Probability distribution over class labels.
///
/// Entry order is the classifier's native label order; the decision layer
/// uses it to break ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ClassProbability>", into = "Vec<ClassProbability>")]
pub struct ClassProbabilities {
    entries: Vec<ClassProbability>,
}

impl ClassProbabilities {
    /// Validate and wrap `(label, probability)` pairs.
    ///
    /// Rejects empty input, duplicate labels, values that are not finite or
    /// fall outside [0, 1], and sums further than
    /// [`PROBABILITY_SUM_TOLERANCE`] from 1.0.
    pub fn try_new<L: Into<String>>(pairs: Vec<(L, f64)>) -> Result<Self> {
        let entries = pairs
            .into_iter()
            .map(|(label, probability)| ClassProbability {
                label: label.into(),
                probability,
            })
            .collect();
        Self::from_entries(entries)
    }

    fn from_entries(mut entries: Vec<ClassProbability>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CipherprintError::InvalidProbabilities(
                "classifier returned no classes".into(),
            ));
        }

        // -0.0 would sort below 0.0 under total_cmp
        for e in entries.iter_mut() {
            if e.probability == 0.0 {
                e.probability = 0.0;
            }
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for e in &entries {
            if !seen.insert(e.label.as_str()) {
                return Err(CipherprintError::InvalidProbabilities(format!(
                    "duplicate label '{}'",
                    e.label
                )));
            }
            if !e.probability.is_finite() || !(0.0..=1.0).contains(&e.probability) {
                return Err(CipherprintError::InvalidProbabilities(format!(
                    "probability {} for '{}' outside [0, 1]",
                    e.probability, e.label
                )));
            }
        }

        let sum: f64 = entries.iter().map(|e| e.probability).sum();
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(CipherprintError::InvalidProbabilities(format!(
                "probabilities sum to {}, expected 1",
                sum
            )));
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a validated distribution; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassProbability> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ClassProbability] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.probability)
    }
}

impl TryFrom<Vec<ClassProbability>> for ClassProbabilities {
    type Error = CipherprintError;

    fn try_from(entries: Vec<ClassProbability>) -> Result<Self> {
        Self::from_entries(entries)
    }
}

impl From<ClassProbabilities> for Vec<ClassProbability> {
    fn from(p: ClassProbabilities) -> Self {
        p.entries
    }
}
