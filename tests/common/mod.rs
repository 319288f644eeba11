//! Common test utilities and helpers.

use cipherprint::features::FeatureVector;
use cipherprint::inference::{ClassProbabilities, Classifier};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic noise standing in for ciphertext.
pub fn pseudo_random(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as u8
        })
        .collect()
}

/// Every byte value exactly `copies` times.
pub fn uniform_bytes(copies: usize) -> Vec<u8> {
    (0..=255u8).cycle().take(256 * copies).collect()
}

/// Classifier that always answers with the same distribution.
pub struct StubClassifier {
    pub width: usize,
    pub answer: Vec<(String, f64)>,
    pub calls: AtomicUsize,
}

impl StubClassifier {
    pub fn new(width: usize, answer: &[(&str, f64)]) -> Self {
        Self {
            width,
            answer: answer.iter().map(|(l, p)| (l.to_string(), *p)).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for StubClassifier {
    fn feature_count(&self) -> usize {
        self.width
    }

    fn predict_proba(&self, _features: &FeatureVector) -> anyhow::Result<ClassProbabilities> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ClassProbabilities::try_new(self.answer.clone())?)
    }
}

/// Rule-based model: repeated 16-byte blocks mean a block cipher in a weak
/// mode, anything else is a coin toss between stream ciphers.
pub struct RuleClassifier;

impl Classifier for RuleClassifier {
    fn feature_count(&self) -> usize {
        cipherprint::FeatureSet::Extended.width()
    }

    fn predict_proba(&self, features: &FeatureVector) -> anyhow::Result<ClassProbabilities> {
        let repetition = features
            .get("block_repetition_16")
            .ok_or_else(|| anyhow::anyhow!("missing block_repetition_16"))?;
        let pairs = if repetition > 0.5 {
            vec![("AES", 0.85), ("RC4", 0.05), ("ChaCha20", 0.10)]
        } else {
            vec![("AES", 0.30), ("RC4", 0.36), ("ChaCha20", 0.34)]
        };
        Ok(ClassProbabilities::try_new(pairs)?)
    }
}

/// Model whose artifact failed to load.
pub struct BrokenClassifier;

impl Classifier for BrokenClassifier {
    fn feature_count(&self) -> usize {
        cipherprint::FeatureSet::Extended.width()
    }

    fn predict_proba(&self, _features: &FeatureVector) -> anyhow::Result<ClassProbabilities> {
        anyhow::bail!("model artifact is corrupt")
    }
}
