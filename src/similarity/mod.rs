//! Similarity measures between utterances.
//!
//! Two independent measures, each in `[0, 1]`: token-set overlap
//! ([`jaccard`]) tolerates word reordering and substitutions, while
//! character-level edit similarity ([`levenshtein_similarity`]) catches
//! typos and near-identical short phrases. The classifier blends both.

pub mod jaccard;
pub mod levenshtein;

pub use jaccard::jaccard;
pub use levenshtein::{levenshtein_distance, levenshtein_similarity};
