//! Analyzer properties that hold for every input.

use crate::common::{pseudo_random, uniform_bytes};
use cipherprint::entropy::shannon_entropy;
use cipherprint::features::{
    block_repetition_ratio, byte_frequency, chi_square_statistic, compression_ratio,
    extract_features, hashed_bigrams, index_of_coincidence, sliding_entropy_stats,
    EXTENDED_FEATURE_COUNT,
};

#[test]
fn vector_width_is_constant() {
    for len in [0usize, 1, 2, 7, 255, 256, 257, 1000, 70_000] {
        let data = pseudo_random(len, len as u64);
        assert_eq!(extract_features(&data).len(), EXTENDED_FEATURE_COUNT, "len {}", len);
    }
}

#[test]
fn entropy_bounds() {
    assert_eq!(shannon_entropy(b""), 0.0);
    assert_eq!(shannon_entropy(&[0u8; 999]), 0.0);
    assert!((shannon_entropy(&uniform_bytes(3)) - 8.0).abs() < 1e-9);

    let e = shannon_entropy(&pseudo_random(4096, 1));
    assert!(e > 7.9 && e <= 8.0);
}

#[test]
fn chi_square_uniform_and_empty() {
    assert!(chi_square_statistic(&uniform_bytes(10)).abs() < 1e-9);
    assert_eq!(chi_square_statistic(b""), 0.0);
    assert!(chi_square_statistic(b"aaaaaaaaaaaaaaaa") > chi_square_statistic(&pseudo_random(16, 5)));
}

#[test]
fn index_of_coincidence_short_inputs() {
    assert_eq!(index_of_coincidence(b""), 0.0);
    assert_eq!(index_of_coincidence(b"x"), 0.0);
    // uniform: each value appears twice -> 256*2 / (512*511)
    let ic = index_of_coincidence(&uniform_bytes(2));
    assert!((ic - 512.0 / (512.0 * 511.0)).abs() < 1e-15);
}

#[test]
fn block_repetition_exact() {
    let data: Vec<u8> = [1u8, 2].repeat(100);
    assert_eq!(block_repetition_ratio(&data, 2), 1.0 - 1.0 / 100.0);
    assert_eq!(block_repetition_ratio(&pseudo_random(4096, 9), 16), 0.0);
}

#[test]
fn byte_frequency_normalization() {
    for len in [1usize, 2, 100, 4097] {
        let sum: f64 = byte_frequency(&pseudo_random(len, 3)).iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "len {}", len);
    }
    let sum: f64 = byte_frequency(b"").iter().sum();
    assert_eq!(sum, 0.0);
}

#[test]
fn hashed_bigram_edges() {
    let one = hashed_bigrams(b"a", 512);
    assert_eq!(one.len(), 512);
    assert!(one.iter().all(|&v| v == 0.0));

    let two = hashed_bigrams(b"ab", 512);
    assert_eq!(two.iter().filter(|&&v| v == 1.0).count(), 1);
    assert_eq!(two.iter().filter(|&&v| v == 0.0).count(), 511);
}

#[test]
fn sliding_entropy_degenerate_and_regular() {
    let short = pseudo_random(200, 4);
    let e = shannon_entropy(&short);
    assert_eq!(sliding_entropy_stats(&short, 256, 64), [e, 0.0, e, e]);

    let long = pseudo_random(4096, 4);
    let [mean, std, min, max] = sliding_entropy_stats(&long, 256, 64);
    assert!(min <= mean && mean <= max);
    assert!(std >= 0.0);
    assert!(max <= 8.0);
}

#[test]
fn compression_separates_structure_from_noise() {
    let structured = b"-----BEGIN PLAINTEXT-----".repeat(64);
    assert!(compression_ratio(&structured) < 0.2);
    assert!(compression_ratio(&pseudo_random(8192, 11)) > 0.99);
}
