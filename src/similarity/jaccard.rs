//! Jaccard similarity over token sets.

use ahash::AHashSet;

/// Calculate the Jaccard similarity between two token sequences.
///
/// Duplicates are ignored: the score is `|A ∩ B| / |A ∪ B|` over the
/// underlying sets. Symmetric in argument order. When both sets are
/// empty the score is defined as `0.0` rather than an error.
pub fn jaccard(tokens_a: &[String], tokens_b: &[String]) -> f64 {
    let a: AHashSet<&str> = tokens_a.iter().map(String::as_str).collect();
    let b: AHashSet<&str> = tokens_b.iter().map(String::as_str).collect();

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(&b).count();

    intersection as f64 / union as f64
}
