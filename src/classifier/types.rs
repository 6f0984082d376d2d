//! Common types for intent classification.

use serde::{Deserialize, Serialize};

/// Intent name returned when no catalog intent matches confidently.
pub const UNKNOWN_INTENT: &str = "unknown";

/// Decision-rule parameters for turning raw scores into an intent.
///
/// Field names follow the original wire format (`minMargin`) when
/// serialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassificationOptions {
    /// Minimum best score required for a non-unknown result, in `[0, 1]`.
    pub threshold: f64,
    /// Minimum gap between the best and second-best scores, in `[0, 1]`.
    /// Rejects ambiguous inputs that match two intents almost equally.
    pub min_margin: f64,
}

impl Default for ClassificationOptions {
    fn default() -> Self {
        ClassificationOptions {
            threshold: 0.62,
            min_margin: 0.06,
        }
    }
}

/// The outcome of classifying one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// A catalog intent name, or [`UNKNOWN_INTENT`].
    pub intent: String,
    /// Best similarity score attained, in `[0, 1]`.
    pub confidence: f64,
    /// Raw text of the best-scoring example. Present even for unknown
    /// results when a best candidate existed, as a diagnostic; `null`
    /// only when nothing scored above zero.
    pub matched_example: Option<String>,
}

impl Classification {
    /// An unknown result carrying the rejected best candidate's score
    /// and example for diagnostics.
    pub fn unknown(confidence: f64, matched_example: Option<String>) -> Self {
        Classification {
            intent: UNKNOWN_INTENT.to_string(),
            confidence,
            matched_example,
        }
    }

    /// Whether this result is the unknown intent.
    pub fn is_unknown(&self) -> bool {
        self.intent == UNKNOWN_INTENT
    }
}
