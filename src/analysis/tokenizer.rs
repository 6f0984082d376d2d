//! Whitespace tokenization over normalized text.

use super::normalizer::normalize;

/// Split text into its normalized word tokens.
///
/// Runs [`normalize`] first, then splits on the single-space delimiter
/// normalization guarantees. Empty or whitespace-only input produces an
/// empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
