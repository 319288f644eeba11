//! Deployment configuration.
//!
//! Defaults match the trained reference deployment: extended feature set,
//! 0.55 confidence threshold, top-2 reporting, 2 MiB input ceiling. Values
//! can come from JSON and be overridden from the environment.

use crate::error::{CipherprintError, Result};
use crate::features::FeatureSet;
use crate::inference::DecisionConfig;
use crate::io::IOLimits;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Overrides `decision.confidence_threshold`.
pub const ENV_CONFIDENCE_THRESHOLD: &str = "CIPHERPRINT_CONFIDENCE_THRESHOLD";
/// Overrides `decision.top_k`.
pub const ENV_TOP_K: &str = "CIPHERPRINT_TOP_K";
/// Overrides `feature_set` (`basic` or `extended`).
pub const ENV_FEATURE_SET: &str = "CIPHERPRINT_FEATURE_SET";

/// Master configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feature_set: FeatureSet,
    pub decision: DecisionConfig,
    pub io: IOLimits,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.decision.validate()
    }

    /// Parse and validate a JSON document; missing fields take defaults.
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json_str).map_err(|e| {
            CipherprintError::Serialization(format!("JSON deserialization error: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Apply `CIPHERPRINT_*` environment overrides.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_CONFIDENCE_THRESHOLD) {
            self.decision.confidence_threshold = raw.trim().parse().map_err(|_| {
                CipherprintError::InvalidConfig(format!(
                    "{} is not a number: '{}'",
                    ENV_CONFIDENCE_THRESHOLD, raw
                ))
            })?;
        }
        if let Some(raw) = lookup(ENV_TOP_K) {
            self.decision.top_k = raw.trim().parse().map_err(|_| {
                CipherprintError::InvalidConfig(format!(
                    "{} is not a positive integer: '{}'",
                    ENV_TOP_K, raw
                ))
            })?;
        }
        if let Some(raw) = lookup(ENV_FEATURE_SET) {
            self.feature_set = raw.parse()?;
        }
        self.validate()?;
        debug!(
            feature_set = %self.feature_set,
            threshold = self.decision.confidence_threshold,
            top_k = self.decision.top_k,
            "configuration resolved"
        );
        Ok(self)
    }
}
