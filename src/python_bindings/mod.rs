//! Python bindings for feature extraction and the decision layer.

use crate::features::{FeatureAssembler, FeatureSet};
use crate::inference::decision::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_TOP_K};
use crate::inference::{decide, ClassProbabilities, DecisionConfig};
use pyo3::prelude::*;

type PyPrediction = (String, f64, Vec<(String, f64)>, bool, f64);

/// Register all Python bindings with the module.
pub fn register_python_bindings(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(extract_features_py, m)?)?;
    m.add_function(wrap_pyfunction!(feature_names_py, m)?)?;
    m.add_function(wrap_pyfunction!(layout_digest_py, m)?)?;
    m.add_function(wrap_pyfunction!(decide_py, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    Ok(())
}

/// Feature vector for one ciphertext.
#[pyfunction]
#[pyo3(name = "extract_features", signature = (data, feature_set = "extended"))]
fn extract_features_py(data: &[u8], feature_set: &str) -> PyResult<Vec<f64>> {
    let set: FeatureSet = feature_set.parse()?;
    Ok(FeatureAssembler::new(set).assemble(data).into_values())
}

/// Column names, one per vector position.
#[pyfunction]
#[pyo3(name = "feature_names", signature = (feature_set = "extended"))]
fn feature_names_py(feature_set: &str) -> PyResult<Vec<String>> {
    let set: FeatureSet = feature_set.parse()?;
    Ok(set.feature_names())
}

/// Layout digest to store alongside a trained model.
#[pyfunction]
#[pyo3(name = "layout_digest", signature = (feature_set = "extended"))]
fn layout_digest_py(feature_set: &str) -> PyResult<String> {
    let set: FeatureSet = feature_set.parse()?;
    Ok(set.layout_digest())
}

/// Apply the decision layer to `(label, probability)` pairs.
///
/// Returns `(predicted_algorithm, confidence, top_predictions, is_uncertain, threshold)`.
#[pyfunction]
#[pyo3(name = "decide", signature = (probabilities, threshold = DEFAULT_CONFIDENCE_THRESHOLD, top_k = DEFAULT_TOP_K))]
fn decide_py(probabilities: Vec<(String, f64)>, threshold: f64, top_k: usize) -> PyResult<PyPrediction> {
    let probabilities = ClassProbabilities::try_new(probabilities)?;
    let config = DecisionConfig {
        confidence_threshold: threshold,
        top_k,
    };
    let r = decide(&probabilities, &config)?;
    let top = r
        .top_k
        .into_iter()
        .map(|p| (p.label, p.confidence))
        .collect();
    Ok((r.predicted_label, r.confidence, top, r.is_uncertain, r.threshold))
}

/// Initialize logging from Python
#[pyfunction]
fn init_logging(json: bool) -> PyResult<()> {
    if json {
        crate::logging::init_tracing_json();
    } else {
        crate::logging::init_tracing();
    }
    Ok(())
}
