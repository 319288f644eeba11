//! End-to-end classification through the pipeline.

use crate::common::{pseudo_random, BrokenClassifier, RuleClassifier, StubClassifier};
use cipherprint::inference::{CipherClassifier, DecisionConfig, UNKNOWN_LABEL};
use cipherprint::{CipherprintError, FeatureSet};

#[test]
fn classify_with_matching_width() {
    let stub = StubClassifier::new(
        FeatureSet::Extended.width(),
        &[("AES", 0.8), ("RC4", 0.15), ("ChaCha20", 0.05)],
    );
    let pipeline = CipherClassifier::new(stub, FeatureSet::Extended, DecisionConfig::default()).unwrap();

    let result = pipeline.classify(&pseudo_random(1024, 2)).unwrap();
    assert_eq!(result.predicted_label, "AES");
    assert_eq!(result.confidence, 0.8);
    assert_eq!(pipeline.classifier().calls(), 1);
}

#[test]
fn empty_ciphertext_is_classified() {
    let stub = StubClassifier::new(FeatureSet::Extended.width(), &[("AES", 0.6), ("RC4", 0.4)]);
    let pipeline = CipherClassifier::new(stub, FeatureSet::Extended, DecisionConfig::default()).unwrap();
    assert_eq!(pipeline.classify(b"").unwrap().predicted_label, "AES");
}

#[test]
fn width_mismatch_never_reaches_the_model() {
    let stub = StubClassifier::new(500, &[("AES", 1.0)]);
    let pipeline = CipherClassifier::new(stub, FeatureSet::Extended, DecisionConfig::default()).unwrap();

    let err = pipeline.classify(&pseudo_random(64, 1)).unwrap_err();
    assert!(matches!(
        err,
        CipherprintError::FeatureWidthMismatch { expected: 500, .. }
    ));
    assert_eq!(pipeline.classifier().calls(), 0);
}

#[test]
fn classifier_failure_is_passed_through() {
    let pipeline =
        CipherClassifier::new(BrokenClassifier, FeatureSet::Extended, DecisionConfig::default()).unwrap();
    let err = pipeline.classify(&pseudo_random(64, 1)).unwrap_err();
    assert!(matches!(err, CipherprintError::ClassifierUnavailable(_)));
    assert_eq!(err.to_string(), "model artifact is corrupt");
}

#[test]
fn rule_model_separates_repeated_blocks() {
    let pipeline =
        CipherClassifier::new(RuleClassifier, FeatureSet::Extended, DecisionConfig::default()).unwrap();

    let block: Vec<u8> = (0..16u8).map(|b| b.wrapping_mul(37)).collect();
    let ecb_like = block.repeat(64);
    let ecb = pipeline.classify(&ecb_like).unwrap();
    assert_eq!(ecb.predicted_label, "AES");
    assert_eq!(ecb.confidence, 0.85);

    let noise = pipeline.classify(&pseudo_random(1024, 3)).unwrap();
    assert_eq!(noise.predicted_label, UNKNOWN_LABEL);
    assert!(noise.is_uncertain);
    assert_eq!(noise.top_k[0].label, "RC4");
    assert_eq!(noise.top_k[1].label, "ChaCha20");
}

#[test]
fn batch_preserves_order() {
    let pipeline =
        CipherClassifier::new(RuleClassifier, FeatureSet::Extended, DecisionConfig::default()).unwrap();
    let block = [0xabu8; 16].repeat(32);
    let inputs = vec![pseudo_random(512, 1), block.clone(), pseudo_random(512, 2), block];

    let results = pipeline.classify_batch(&inputs);
    let labels: Vec<String> = results
        .into_iter()
        .map(|r| r.unwrap().predicted_label)
        .collect();
    assert_eq!(labels, vec![UNKNOWN_LABEL, "AES", UNKNOWN_LABEL, "AES"]);
}
