//! Error types for the cipherprint fingerprinting pipeline.
//!
//! Degenerate inputs (empty or one-byte buffers) never produce errors; every
//! analyzer has a defined output for them. The variants here cover
//! configuration skew, classifier failures and I/O.

use thiserror::Error;

/// Main error type for cipherprint operations.
#[derive(Debug, Error)]
pub enum CipherprintError {
    /// Assembled vector width does not match what the classifier expects.
    #[error("Feature width mismatch: classifier expects {expected} features, pipeline produced {actual}")]
    FeatureWidthMismatch { expected: usize, actual: usize },

    /// Failure reported by the external classifier, passed through as-is.
    #[error(transparent)]
    ClassifierUnavailable(anyhow::Error),

    /// Probability output that is not a distribution
    #[error("Invalid class probabilities: {0}")]
    InvalidProbabilities(String),

    /// Decision or pipeline configuration out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Model manifest was produced for a different feature layout
    #[error("Feature layout mismatch: expected {expected}, found {actual}")]
    LayoutMismatch { expected: String, actual: String },

    /// Input file exceeds the configured size ceiling
    #[error("Input too large: {size} bytes (limit: {limit})")]
    InputTooLarge { size: u64, limit: u64 },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for cipherprint operations
pub type Result<T> = std::result::Result<T, CipherprintError>;

impl CipherprintError {
    /// Whether retrying the same call could plausibly succeed.
    ///
    /// Width and layout mismatches signal version skew between the model and
    /// the extractor and are never retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CipherprintError::Io(_))
    }
}

/// Convert cipherprint errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<CipherprintError> for pyo3::PyErr {
    fn from(err: CipherprintError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyException, PyIOError, PyValueError};

        match err {
            CipherprintError::Io(e) => PyIOError::new_err(e.to_string()),
            CipherprintError::InvalidConfig(msg) | CipherprintError::InvalidProbabilities(msg) => {
                PyValueError::new_err(msg)
            }
            _ => PyException::new_err(err.to_string()),
        }
    }
}
