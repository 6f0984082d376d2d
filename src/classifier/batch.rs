//! Batch classification over one built index.

use rayon::prelude::*;

use crate::catalog::CatalogIndex;

use super::Classifier;
use super::types::{Classification, ClassificationOptions};

/// Classify every text in `texts` against one index, in parallel.
///
/// Each item is classified independently with the same options; results
/// come back in input order. Sharing a single prebuilt index across the
/// batch is what makes this cheaper than per-item calls, not any
/// cross-item interaction.
pub fn classify_batch<C, S>(
    classifier: &C,
    texts: &[S],
    index: &CatalogIndex,
    options: &ClassificationOptions,
) -> Vec<Classification>
where
    C: Classifier + ?Sized,
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| classifier.classify(text.as_ref(), index, options))
        .collect()
}
