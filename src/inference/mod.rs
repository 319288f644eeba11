//! Classification on top of extracted features.
//!
//! The model itself is external and reached through the [`Classifier`]
//! trait. This module owns the width check, the decision layer and the
//! manifest that pins a model to a feature layout.

pub mod classifier;
pub mod decision;
pub mod manifest;
pub mod pipeline;

pub use self::classifier::{ClassProbabilities, ClassProbability, Classifier};
pub use self::decision::{
    decide, DecisionConfig, PredictionResult, RankedPrediction, UNKNOWN_LABEL,
};
pub use self::manifest::ModelManifest;
pub use self::pipeline::CipherClassifier;
