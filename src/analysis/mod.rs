//! Text analysis for intent matching.
//!
//! Analysis is a two-stage pipeline: [`normalize`] reduces raw text to a
//! canonical form (case folding, diacritic stripping, punctuation
//! removal, whitespace collapsing) and [`tokenize`] splits the canonical
//! form into words. Example phrases and inputs go through the same
//! pipeline, so comparisons are robust to superficial variation.

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::normalize;
pub use tokenizer::tokenize;
