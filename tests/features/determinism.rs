//! Extraction is a pure function of the input bytes.

use crate::common::pseudo_random;
use cipherprint::features::{extract_features, FeatureAssembler, FeatureSet};

fn bits(values: &[f64]) -> Vec<u64> {
    values.iter().map(|v| v.to_bits()).collect()
}

#[test]
fn repeated_extraction_is_bit_identical() {
    for len in [0usize, 1, 300, 10_000] {
        let data = pseudo_random(len, 77);
        let a = extract_features(&data);
        let b = extract_features(&data);
        assert_eq!(bits(a.values()), bits(b.values()), "len {}", len);
    }
}

#[test]
fn parallel_batch_matches_sequential() {
    let buffers: Vec<Vec<u8>> = (0..32).map(|i| pseudo_random(100 + i * 97, i as u64)).collect();
    let assembler = FeatureAssembler::new(FeatureSet::Extended);
    let batch = assembler.assemble_batch(&buffers);
    for (buf, v) in buffers.iter().zip(batch.iter()) {
        assert_eq!(bits(v.values()), bits(assembler.assemble(buf).values()));
    }
}

#[test]
fn vectors_serialize_stably() {
    let v = extract_features(&pseudo_random(512, 8));
    let j1 = serde_json::to_string(&v).unwrap();
    let j2 = serde_json::to_string(&extract_features(&pseudo_random(512, 8))).unwrap();
    assert_eq!(j1, j2);
    assert!(j1.contains("\"feature_set\":\"extended\""));
}
