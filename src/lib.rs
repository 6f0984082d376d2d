//! # Tino
//!
//! Example-based fuzzy intent classification for short utterances.
//!
//! Tino matches a free-text input against a catalog of labeled example
//! phrases and returns the best-matching intent, or `"unknown"` when no
//! intent matches confidently. There is no trained model: each example is
//! scored with a fixed blend of token-set overlap (Jaccard),
//! character-level edit similarity (Levenshtein), and a containment
//! bonus, and a threshold + margin rule turns the raw scores into a
//! discrete decision.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Diacritic-insensitive text normalization
//! - Order-preserving intent catalogs with JSON (de)serialization
//! - Precomputed catalog index, safe to share across threads
//! - Build-once index cache for repeated catalogs
//! - Parallel batch classification

pub mod analysis;
pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod similarity;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
