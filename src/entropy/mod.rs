//! Entropy calculation and analysis.
//!
//! This module provides the entropy primitives the feature analyzers build on:
//!
//! - Core Shannon entropy and an incremental byte histogram
//! - Sliding window entropy series
//! - Summary statistics over an entropy series
//!
//! # Example
//!
//! ```
//! use cipherprint::entropy::{analyze_windows, shannon_entropy, WindowConfig};
//!
//! let data = b"Hello, World!";
//! let entropy = shannon_entropy(data);
//! assert!(entropy > 0.0 && entropy <= 8.0);
//!
//! let analysis = analyze_windows(data, &WindowConfig { window_size: 4, step_size: 2 });
//! assert_eq!(analysis.len(), 5);
//! ```

pub mod core;
pub mod stats;
pub mod window;

pub use self::core::{shannon_entropy, Histogram};
pub use self::stats::Stats;
pub use self::window::{analyze_windows, WindowAnalysis, WindowConfig};
