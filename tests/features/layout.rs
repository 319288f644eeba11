//! Field positions are a contract with trained models.

use crate::common::pseudo_random;
use cipherprint::entropy::shannon_entropy;
use cipherprint::features::{
    block_repetition_ratio, byte_frequency, chi_square_statistic, compression_ratio,
    extract_features, hashed_bigrams, index_of_coincidence, sliding_entropy_stats, FeatureSet,
};

#[test]
fn extended_layout_positions() {
    let data = pseudo_random(3000, 21);
    let v = extract_features(&data);
    let values = v.values();

    assert_eq!(values[0], shannon_entropy(&data));
    assert_eq!(values[1], chi_square_statistic(&data));
    assert_eq!(values[2], index_of_coincidence(&data));
    assert_eq!(&values[3..6], &[3000.0, 0.0, 8.0]);
    assert_eq!(values[6], block_repetition_ratio(&data, 8));
    assert_eq!(values[7], block_repetition_ratio(&data, 16));
    assert_eq!(values[8], block_repetition_ratio(&data, 32));
    assert_eq!(values[9], compression_ratio(&data));
    assert_eq!(&values[10..14], &sliding_entropy_stats(&data, 256, 64));
    assert_eq!(&values[14..270], &byte_frequency(&data)[..]);
    assert_eq!(&values[270..], &hashed_bigrams(&data, 512)[..]);
}

#[test]
fn basic_layout_positions() {
    let data = pseudo_random(1000, 5);
    let v = cipherprint::FeatureAssembler::new(FeatureSet::Basic).assemble(&data);
    let values = v.values();
    assert_eq!(values.len(), 264);
    assert_eq!(values[0], shannon_entropy(&data));
    assert_eq!(&values[3..6], &[1000.0, 0.0, 8.0]);
    assert_eq!(values[6], block_repetition_ratio(&data, 8));
    assert_eq!(values[7], block_repetition_ratio(&data, 16));
    assert_eq!(&values[8..], &byte_frequency(&data)[..]);
}

#[test]
fn layout_digests_are_pinned_per_set() {
    let extended = FeatureSet::Extended.layout_digest();
    assert_eq!(extended, FeatureSet::Extended.layout_digest());
    assert_ne!(extended, FeatureSet::Basic.layout_digest());
    assert!(extended.chars().all(|c| c.is_ascii_hexdigit()));
}
