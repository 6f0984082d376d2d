//! Intent classification over a prebuilt catalog index.
//!
//! The [`Classifier`] trait is the seam between scoring strategies and
//! their callers: a strategy receives the input text, a read-only
//! [`CatalogIndex`](crate::catalog::CatalogIndex), and
//! [`ClassificationOptions`], and returns a [`Classification`]. The
//! shipped strategy is [`FuzzyClassifier`]; alternative scorers (for
//! example a statistical backend) plug in behind the same trait without
//! callers noticing.

pub mod batch;
pub mod fuzzy;
pub mod types;

pub use batch::classify_batch;
pub use fuzzy::{
    FuzzyClassifier, WEIGHT_CONTAINMENT, WEIGHT_EDIT_SIMILARITY, WEIGHT_TOKEN_OVERLAP,
};
pub use types::{Classification, ClassificationOptions, UNKNOWN_INTENT};

use crate::catalog::CatalogIndex;

/// Intent classification strategy.
///
/// Implementations must be pure with respect to the index: the same
/// `(text, index, options)` triple always yields the same result, and
/// concurrent calls against one index need no coordination.
pub trait Classifier: Send + Sync {
    /// Classify `text` against the indexed catalog.
    ///
    /// Total over any input: degenerate text or an empty index yields
    /// the `"unknown"` intent rather than an error.
    fn classify(
        &self,
        text: &str,
        index: &CatalogIndex,
        options: &ClassificationOptions,
    ) -> Classification;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &'static str;
}
