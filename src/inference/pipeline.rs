//! End-to-end classification: bytes in, [`PredictionResult`] out.

use crate::error::{CipherprintError, Result};
use crate::features::{FeatureAssembler, FeatureSet, FeatureVector};
use crate::inference::classifier::Classifier;
use crate::inference::decision::{decide, DecisionConfig, PredictionResult};
use crate::log_error;
use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

/// Feature extraction, width check, external classifier and decision layer.
///
/// Holds no mutable state; one instance can serve concurrent requests.
pub struct CipherClassifier<C> {
    classifier: C,
    assembler: FeatureAssembler,
    decision: DecisionConfig,
}

impl<C: Classifier> CipherClassifier<C> {
    pub fn new(classifier: C, feature_set: FeatureSet, decision: DecisionConfig) -> Result<Self> {
        decision.validate()?;
        Ok(Self {
            classifier,
            assembler: FeatureAssembler::new(feature_set),
            decision,
        })
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn feature_set(&self) -> FeatureSet {
        self.assembler.feature_set()
    }

    pub fn decision_config(&self) -> &DecisionConfig {
        &self.decision
    }

    /// Extract features without classifying.
    pub fn features(&self, ciphertext: &[u8]) -> FeatureVector {
        self.assembler.assemble(ciphertext)
    }

    /// Classify one ciphertext.
    ///
    /// Fails with [`CipherprintError::FeatureWidthMismatch`] before the
    /// classifier is called if the layout width differs from the model's.
    pub fn classify(&self, ciphertext: &[u8]) -> Result<PredictionResult> {
        let span = info_span!("classify", bytes = ciphertext.len());
        let _guard = span.enter();

        let features = self.assembler.assemble(ciphertext);
        self.check_width(&features)?;

        let probabilities = self
            .classifier
            .predict_proba(&features)
            .map_err(|e| log_error!(CipherprintError::ClassifierUnavailable(e)))?;
        debug!(classes = probabilities.len(), "classifier returned");

        let result = decide(&probabilities, &self.decision)?;
        if result.is_uncertain {
            warn!(
                confidence = result.confidence,
                threshold = result.threshold,
                "prediction below confidence threshold"
            );
        } else {
            info!(
                algorithm = %result.predicted_label,
                confidence = result.confidence,
                "prediction"
            );
        }
        Ok(result)
    }

    /// Classify independent ciphertexts in parallel, preserving input order.
    pub fn classify_batch<B>(&self, ciphertexts: &[B]) -> Vec<Result<PredictionResult>>
    where
        B: AsRef<[u8]> + Sync,
    {
        ciphertexts
            .par_iter()
            .map(|c| self.classify(c.as_ref()))
            .collect()
    }

    fn check_width(&self, features: &FeatureVector) -> Result<()> {
        let expected = self.classifier.feature_count();
        if features.len() != expected {
            return Err(log_error!(
                CipherprintError::FeatureWidthMismatch {
                    expected,
                    actual: features.len(),
                },
                "classifier and feature layout are out of sync"
            ));
        }
        Ok(())
    }
}
