//! Feature-layout manifest stored next to a trained model.
//!
//! A model is only valid for the layout it was trained on. The manifest
//! records that layout (version id, digest and width) plus the label order,
//! so a deployment can refuse a mismatched model at load time instead of
//! silently mis-predicting.

use crate::error::{CipherprintError, Result};
use crate::features::FeatureSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelManifest {
    pub feature_set: FeatureSet,
    pub feature_set_version: String,
    pub layout_digest: String,
    pub feature_count: usize,
    /// Class labels in the model's native order.
    pub labels: Vec<String>,
}

impl ModelManifest {
    /// Manifest describing a model trained on `feature_set`.
    pub fn for_feature_set<L: Into<String>>(feature_set: FeatureSet, labels: Vec<L>) -> Self {
        Self {
            feature_set,
            feature_set_version: feature_set.version().to_string(),
            layout_digest: feature_set.layout_digest(),
            feature_count: feature_set.width(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Check that vectors from `feature_set` can be fed to this model.
    pub fn validate_against(&self, feature_set: FeatureSet) -> Result<()> {
        if self.feature_set_version != feature_set.version() {
            return Err(CipherprintError::LayoutMismatch {
                expected: feature_set.version().to_string(),
                actual: self.feature_set_version.clone(),
            });
        }
        let digest = feature_set.layout_digest();
        if self.layout_digest != digest {
            return Err(CipherprintError::LayoutMismatch {
                expected: digest,
                actual: self.layout_digest.clone(),
            });
        }
        if self.feature_count != feature_set.width() {
            return Err(CipherprintError::FeatureWidthMismatch {
                expected: self.feature_count,
                actual: feature_set.width(),
            });
        }
        Ok(())
    }

    /// Serialize to JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CipherprintError::Serialization(format!("JSON serialization error: {}", e)))
    }

    /// Deserialize from JSON string.
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).map_err(|e| {
            CipherprintError::Serialization(format!("JSON deserialization error: {}", e))
        })
    }

    /// Load a manifest file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let manifest = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            version = %manifest.feature_set_version,
            classes = manifest.labels.len(),
            "loaded model manifest"
        );
        Ok(manifest)
    }

    /// Write the manifest as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
