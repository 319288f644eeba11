//! Ciphertext fingerprinting.
//!
//! Turns raw ciphertext bytes into a fixed-layout numeric feature vector and
//! turns an external classifier's class probabilities into a labelled,
//! possibly `Unknown`, answer.
//!
//! ```
//! use cipherprint::features::extract_features;
//! use cipherprint::inference::{
//!     CipherClassifier, ClassProbabilities, Classifier, DecisionConfig,
//! };
//! use cipherprint::features::{FeatureSet, FeatureVector};
//!
//! struct AlwaysAes;
//!
//! impl Classifier for AlwaysAes {
//!     fn feature_count(&self) -> usize {
//!         FeatureSet::Extended.width()
//!     }
//!     fn predict_proba(&self, _: &FeatureVector) -> anyhow::Result<ClassProbabilities> {
//!         Ok(ClassProbabilities::try_new(vec![("AES", 0.9), ("RC4", 0.1)])?)
//!     }
//! }
//!
//! let pipeline =
//!     CipherClassifier::new(AlwaysAes, FeatureSet::Extended, DecisionConfig::default()).unwrap();
//! let result = pipeline.classify(b"\x13\x37\xca\xfe").unwrap();
//! assert_eq!(result.predicted_label, "AES");
//! assert_eq!(extract_features(b"").len(), FeatureSet::Extended.width());
//! ```

pub mod config;
pub mod dataset;
pub mod entropy;
pub mod error;
pub mod features;
pub mod inference;
pub mod io;
pub mod logging;

#[cfg(feature = "python-ext")]
pub mod python_bindings;

pub use crate::config::Config;
pub use crate::error::{CipherprintError, Result};
pub use crate::features::{extract_features, FeatureAssembler, FeatureSet, FeatureVector};
pub use crate::inference::{CipherClassifier, Classifier, PredictionResult};

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python-ext")]
#[pymodule]
fn cipherprint(m: &Bound<'_, PyModule>) -> PyResult<()> {
    crate::python_bindings::register_python_bindings(m)
}
