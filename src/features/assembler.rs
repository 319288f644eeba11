//! Feature vector assembly.
//!
//! Runs the analyzers of a [`FeatureSet`] in layout order and concatenates
//! their outputs. Any byte buffer is accepted, including empty ones; the
//! analyzers define the degenerate cases.

use crate::entropy::shannon_entropy;
use crate::error::CipherprintError;
use crate::features::advanced::{compression_ratio, hashed_bigrams, sliding_entropy_stats};
use crate::features::frequency::{byte_frequency, chi_square_statistic, index_of_coincidence};
use crate::features::layout::{FeatureSet, FeatureStep};
use crate::features::structural::{block_repetition_ratio, length_features};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Index;
use tracing::debug;

/// Fixed-layout numeric fingerprint of one buffer.
///
/// `values.len()` always equals `feature_set.width()`; deserialization
/// rejects anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFeatureVector")]
pub struct FeatureVector {
    feature_set: FeatureSet,
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawFeatureVector {
    feature_set: FeatureSet,
    values: Vec<f64>,
}

impl TryFrom<RawFeatureVector> for FeatureVector {
    type Error = CipherprintError;

    fn try_from(raw: RawFeatureVector) -> Result<Self, Self::Error> {
        let expected = raw.feature_set.width();
        if raw.values.len() != expected {
            return Err(CipherprintError::FeatureWidthMismatch {
                expected,
                actual: raw.values.len(),
            });
        }
        Ok(Self {
            feature_set: raw.feature_set,
            values: raw.values,
        })
    }
}

impl FeatureVector {
    /// Layout this vector was assembled with.
    pub fn feature_set(&self) -> FeatureSet {
        self.feature_set
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Look up a slot by its layout name (see [`FeatureSet::feature_names`]).
    pub fn get(&self, name: &str) -> Option<f64> {
        self.feature_set
            .feature_names()
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.values.get(i).copied())
    }

    /// `(name, value)` pairs in layout order.
    pub fn named(&self) -> Vec<(String, f64)> {
        self.feature_set
            .feature_names()
            .into_iter()
            .zip(self.values.iter().copied())
            .collect()
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

/// Builds [`FeatureVector`]s for one feature set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureAssembler {
    feature_set: FeatureSet,
}

impl FeatureAssembler {
    pub fn new(feature_set: FeatureSet) -> Self {
        Self { feature_set }
    }

    pub fn feature_set(&self) -> FeatureSet {
        self.feature_set
    }

    /// Width of every vector this assembler produces.
    pub fn width(&self) -> usize {
        self.feature_set.width()
    }

    /// Assemble the vector for `data`.
    pub fn assemble(&self, data: &[u8]) -> FeatureVector {
        let mut values = Vec::with_capacity(self.width());
        for step in self.feature_set.steps() {
            evaluate_step(step, data, &mut values);
        }
        debug_assert_eq!(values.len(), self.width());
        debug!(
            feature_set = %self.feature_set,
            bytes = data.len(),
            width = values.len(),
            "assembled feature vector"
        );
        FeatureVector {
            feature_set: self.feature_set,
            values,
        }
    }

    /// Assemble vectors for independent buffers in parallel, preserving order.
    pub fn assemble_batch<B>(&self, buffers: &[B]) -> Vec<FeatureVector>
    where
        B: AsRef<[u8]> + Sync,
    {
        buffers
            .par_iter()
            .map(|b| self.assemble(b.as_ref()))
            .collect()
    }
}

fn evaluate_step(step: &FeatureStep, data: &[u8], out: &mut Vec<f64>) {
    match *step {
        FeatureStep::Entropy => out.push(shannon_entropy(data)),
        FeatureStep::ChiSquare => out.push(chi_square_statistic(data)),
        FeatureStep::IndexOfCoincidence => out.push(index_of_coincidence(data)),
        FeatureStep::Length => out.extend_from_slice(&length_features(data)),
        FeatureStep::BlockRepetition { block_size } => {
            out.push(block_repetition_ratio(data, block_size))
        }
        FeatureStep::CompressionRatio => out.push(compression_ratio(data)),
        FeatureStep::SlidingEntropy { window_size, step } => {
            out.extend_from_slice(&sliding_entropy_stats(data, window_size, step))
        }
        FeatureStep::ByteFrequency => out.extend_from_slice(&byte_frequency(data)),
        FeatureStep::HashedBigrams { bins } => out.extend(hashed_bigrams(data, bins)),
    }
}

/// Extract the default (extended) feature vector.
pub fn extract_features(data: &[u8]) -> FeatureVector {
    FeatureAssembler::new(FeatureSet::Extended).assemble(data)
}
