#![no_main]
use cipherprint::features::{FeatureAssembler, FeatureSet};
use cipherprint::inference::{decide, ClassProbabilities, DecisionConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for set in [FeatureSet::Basic, FeatureSet::Extended] {
        let v = FeatureAssembler::new(set).assemble(data);
        assert_eq!(v.len(), set.width());
        assert!(v.values().iter().all(|x| x.is_finite()));
    }

    // treat the first bytes as raw class weights
    let weights: Vec<f64> = data.iter().take(8).map(|&b| b as f64 + 1.0).collect();
    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        let pairs: Vec<(String, f64)> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("class{}", i), w / total))
            .collect();
        if let Ok(probs) = ClassProbabilities::try_new(pairs) {
            let _ = decide(&probs, &DecisionConfig::default());
        }
    }
});
