//! Ciphertext feature extraction.
//!
//! Each analyzer is a total function over byte slices: empty and one-byte
//! inputs get defined zero or collapsed outputs instead of errors. The
//! assembler concatenates analyzer outputs in the order fixed by a
//! [`FeatureSet`].
//!
//! ```
//! use cipherprint::features::{extract_features, FeatureSet};
//!
//! let v = extract_features(b"\x8f\x1e\xa0\x33");
//! assert_eq!(v.len(), FeatureSet::Extended.width());
//! ```

pub mod advanced;
pub mod assembler;
pub mod frequency;
pub mod layout;
pub mod structural;

pub use self::advanced::{compression_ratio, hashed_bigrams, sliding_entropy_stats};
pub use self::assembler::{extract_features, FeatureAssembler, FeatureVector};
pub use self::frequency::{byte_frequency, chi_square_statistic, index_of_coincidence};
pub use self::layout::{FeatureSet, FeatureStep, BASIC_FEATURE_COUNT, EXTENDED_FEATURE_COUNT};
pub use self::structural::{block_repetition_ratio, length_features};
