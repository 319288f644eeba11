//! Feature vector layout.
//!
//! A feature set is an explicit ordered list of [`FeatureStep`]s. Position
//! in the vector is load-bearing: a trained classifier's coefficients are
//! only valid for the exact layout it was trained on, so every change to a
//! step, its parameters or the order must ship as a new feature set with a
//! new version id.

use crate::error::CipherprintError;
use crate::features::advanced::{
    BIGRAM_BINS, COMPRESSION_LEVEL, SLIDING_WINDOW_SIZE, SLIDING_WINDOW_STEP,
};
use crate::features::frequency::BYTE_BINS;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Width of [`FeatureSet::Extended`].
pub const EXTENDED_FEATURE_COUNT: usize = 782;

/// Width of [`FeatureSet::Basic`].
pub const BASIC_FEATURE_COUNT: usize = 264;

/// One feature-producing step and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FeatureStep {
    Entropy,
    ChiSquare,
    IndexOfCoincidence,
    /// `[length, length mod 8, length mod 16]`
    Length,
    BlockRepetition { block_size: usize },
    CompressionRatio,
    /// `[mean, stddev, min, max]`
    SlidingEntropy { window_size: usize, step: usize },
    ByteFrequency,
    HashedBigrams { bins: usize },
}

impl FeatureStep {
    /// Number of vector slots this step fills.
    pub const fn arity(&self) -> usize {
        match self {
            FeatureStep::Entropy
            | FeatureStep::ChiSquare
            | FeatureStep::IndexOfCoincidence
            | FeatureStep::BlockRepetition { .. }
            | FeatureStep::CompressionRatio => 1,
            FeatureStep::Length => 3,
            FeatureStep::SlidingEntropy { .. } => 4,
            FeatureStep::ByteFrequency => BYTE_BINS,
            FeatureStep::HashedBigrams { bins } => *bins,
        }
    }

    /// Stable textual form, including every parameter that affects values.
    pub fn descriptor(&self) -> String {
        match self {
            FeatureStep::Entropy => "entropy".into(),
            FeatureStep::ChiSquare => "chi_square".into(),
            FeatureStep::IndexOfCoincidence => "index_of_coincidence".into(),
            FeatureStep::Length => "length".into(),
            FeatureStep::BlockRepetition { block_size } => {
                format!("block_repetition:{}", block_size)
            }
            FeatureStep::CompressionRatio => format!("compression_ratio:zlib{}", COMPRESSION_LEVEL),
            FeatureStep::SlidingEntropy { window_size, step } => {
                format!("sliding_entropy:{}/{}", window_size, step)
            }
            FeatureStep::ByteFrequency => "byte_frequency".into(),
            FeatureStep::HashedBigrams { bins } => format!("hashed_bigrams:{}", bins),
        }
    }

    /// Per-slot names, `arity()` of them.
    pub fn slot_names(&self) -> Vec<String> {
        match self {
            FeatureStep::Entropy => vec!["entropy".into()],
            FeatureStep::ChiSquare => vec!["chi_square".into()],
            FeatureStep::IndexOfCoincidence => vec!["index_of_coincidence".into()],
            FeatureStep::Length => vec![
                "length".into(),
                "length_mod_8".into(),
                "length_mod_16".into(),
            ],
            FeatureStep::BlockRepetition { block_size } => {
                vec![format!("block_repetition_{}", block_size)]
            }
            FeatureStep::CompressionRatio => vec!["compression_ratio".into()],
            FeatureStep::SlidingEntropy { .. } => ["mean", "std", "min", "max"]
                .iter()
                .map(|s| format!("sliding_entropy_{}", s))
                .collect(),
            FeatureStep::ByteFrequency => (0..BYTE_BINS)
                .map(|b| format!("byte_freq_0x{:02x}", b))
                .collect(),
            FeatureStep::HashedBigrams { bins } => {
                (0..*bins).map(|b| format!("bigram_bucket_{}", b)).collect()
            }
        }
    }
}

const BASIC_STEPS: [FeatureStep; 7] = [
    FeatureStep::Entropy,
    FeatureStep::ChiSquare,
    FeatureStep::IndexOfCoincidence,
    FeatureStep::Length,
    FeatureStep::BlockRepetition { block_size: 8 },
    FeatureStep::BlockRepetition { block_size: 16 },
    FeatureStep::ByteFrequency,
];

const EXTENDED_STEPS: [FeatureStep; 11] = [
    FeatureStep::Entropy,
    FeatureStep::ChiSquare,
    FeatureStep::IndexOfCoincidence,
    FeatureStep::Length,
    FeatureStep::BlockRepetition { block_size: 8 },
    FeatureStep::BlockRepetition { block_size: 16 },
    FeatureStep::BlockRepetition { block_size: 32 },
    FeatureStep::CompressionRatio,
    FeatureStep::SlidingEntropy {
        window_size: SLIDING_WINDOW_SIZE,
        step: SLIDING_WINDOW_STEP,
    },
    FeatureStep::ByteFrequency,
    FeatureStep::HashedBigrams { bins: BIGRAM_BINS },
];

/// Named, versioned feature layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureSet {
    /// First-generation layout: statistics, lengths, 8/16 repetition, byte histogram.
    Basic,
    /// Adds 32-byte repetition, compression, sliding entropy and hashed bigrams.
    #[default]
    Extended,
}

impl FeatureSet {
    /// Ordered steps of this layout.
    pub fn steps(&self) -> &'static [FeatureStep] {
        match self {
            FeatureSet::Basic => &BASIC_STEPS,
            FeatureSet::Extended => &EXTENDED_STEPS,
        }
    }

    /// Total vector width.
    pub fn width(&self) -> usize {
        self.steps().iter().map(FeatureStep::arity).sum()
    }

    /// Version id persisted next to trained models.
    pub fn version(&self) -> &'static str {
        match self {
            FeatureSet::Basic => "basic-v1",
            FeatureSet::Extended => "extended-v1",
        }
    }

    /// One name per vector position.
    pub fn feature_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.width());
        for step in self.steps() {
            names.extend(step.slot_names());
        }
        names
    }

    /// Hex SHA-256 over the version id and ordered step descriptors.
    pub fn layout_digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.version().as_bytes());
        for step in self.steps() {
            hasher.update(b"\n");
            hasher.update(step.descriptor().as_bytes());
            hasher.update(b"#");
            hasher.update((step.arity() as u64).to_le_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureSet::Basic => write!(f, "basic"),
            FeatureSet::Extended => write!(f, "extended"),
        }
    }
}

impl FromStr for FeatureSet {
    type Err = CipherprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "basic-v1" => Ok(FeatureSet::Basic),
            "extended" | "extended-v1" => Ok(FeatureSet::Extended),
            other => Err(CipherprintError::InvalidConfig(format!(
                "unknown feature set '{}'",
                other
            ))),
        }
    }
}
