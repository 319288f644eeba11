//! Decision rule over class probabilities.

use cipherprint::inference::{decide, ClassProbabilities, DecisionConfig, UNKNOWN_LABEL};

fn probs(pairs: &[(&str, f64)]) -> ClassProbabilities {
    ClassProbabilities::try_new(pairs.to_vec()).unwrap()
}

#[test]
fn confident_prediction() {
    let result = decide(
        &probs(&[("A", 0.7), ("B", 0.2), ("C", 0.1)]),
        &DecisionConfig::default(),
    )
    .unwrap();

    assert_eq!(result.predicted_label, "A");
    assert_eq!(result.confidence, 0.7);
    assert!(!result.is_uncertain);
    assert_eq!(result.threshold, 0.55);
    let top: Vec<(&str, f64)> = result
        .top_k
        .iter()
        .map(|p| (p.label.as_str(), p.confidence))
        .collect();
    assert_eq!(top, vec![("A", 0.7), ("B", 0.2)]);
}

#[test]
fn uncertain_prediction_still_reports_real_ranking() {
    let result = decide(
        &probs(&[("A", 0.4), ("B", 0.35), ("C", 0.25)]),
        &DecisionConfig::default(),
    )
    .unwrap();

    assert_eq!(result.predicted_label, UNKNOWN_LABEL);
    assert_eq!(result.confidence, 0.4);
    assert!(result.is_uncertain);
    assert_eq!(result.top_k[0].label, "A");
    assert_eq!(result.top_k[1].label, "B");
}

#[test]
fn threshold_is_inclusive() {
    let config = DecisionConfig {
        confidence_threshold: 0.5,
        top_k: 1,
    };
    let result = decide(&probs(&[("X", 0.5), ("Y", 0.5)]), &config).unwrap();
    assert_eq!(result.predicted_label, "X");
    assert!(!result.is_uncertain);
    assert_eq!(result.top_k.len(), 1);
}

#[test]
fn top_k_larger_than_class_count() {
    let config = DecisionConfig {
        confidence_threshold: 0.55,
        top_k: 10,
    };
    let result = decide(&probs(&[("X", 0.9), ("Y", 0.1)]), &config).unwrap();
    assert_eq!(result.top_k.len(), 2);
}

#[test]
fn wire_format_field_names() {
    let result = decide(&probs(&[("AES", 0.91), ("RC4", 0.09)]), &DecisionConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&result.to_json_string().unwrap()).unwrap();
    assert_eq!(value["predicted_algorithm"], "AES");
    assert_eq!(value["top_predictions"][1]["label"], "RC4");
    assert_eq!(value["is_uncertain"], false);
}
