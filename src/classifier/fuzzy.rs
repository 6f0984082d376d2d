//! Example-based fuzzy intent classifier.

use crate::analysis::{normalize, tokenize};
use crate::catalog::{CatalogIndex, IndexedExample};
use crate::similarity::{jaccard, levenshtein_similarity};

use super::Classifier;
use super::types::{Classification, ClassificationOptions};

/// Weight of token-set overlap in the combined score. Overlap carries
/// the most weight because it survives word reordering and filler words.
pub const WEIGHT_TOKEN_OVERLAP: f64 = 0.55;
/// Weight of character-level edit similarity, which catches typos and
/// near-identical short phrases.
pub const WEIGHT_EDIT_SIMILARITY: f64 = 0.35;
/// Weight of the containment bonus for inputs that embed an example
/// verbatim (or vice versa), e.g. a bare "saldo".
pub const WEIGHT_CONTAINMENT: f64 = 0.10;

/// Command alias resolved before any scoring.
const START_COMMAND: &str = "/start";
/// Intent the `/start` alias maps to, whether or not the catalog
/// defines it.
const START_INTENT: &str = "greeting";

/// Scores the input against every indexed example with a fixed blend of
/// Jaccard overlap, Levenshtein similarity, and a containment bonus,
/// then applies a threshold + margin decision rule.
///
/// The weights sum to 1 and every component lies in `[0, 1]`, so
/// confidences are in `[0, 1]` by construction. Stateless; one instance
/// can serve any number of catalogs and threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyClassifier;

impl FuzzyClassifier {
    /// Create a new fuzzy classifier.
    pub fn new() -> Self {
        FuzzyClassifier
    }

    /// Combined score of the input against one indexed example.
    fn score(input_normalized: &str, input_tokens: &[String], example: &IndexedExample) -> f64 {
        let overlap = jaccard(input_tokens, &example.tokens);
        let edit = levenshtein_similarity(input_normalized, &example.normalized);

        // Bonus only for non-empty substrings; an empty side would match
        // everything vacuously.
        let contains = if !input_normalized.is_empty()
            && !example.normalized.is_empty()
            && (input_normalized.contains(&example.normalized)
                || example.normalized.contains(input_normalized))
        {
            1.0
        } else {
            0.0
        };

        WEIGHT_TOKEN_OVERLAP * overlap + WEIGHT_EDIT_SIMILARITY * edit + WEIGHT_CONTAINMENT * contains
    }
}

impl Classifier for FuzzyClassifier {
    fn classify(
        &self,
        text: &str,
        index: &CatalogIndex,
        options: &ClassificationOptions,
    ) -> Classification {
        let input_normalized = normalize(text);
        let input_tokens = tokenize(text);

        // Command alias, resolved independently of the catalog. Returns
        // "greeting" even when the catalog defines no such intent; see
        // DESIGN.md.
        if input_normalized == START_COMMAND {
            return Classification {
                intent: START_INTENT.to_string(),
                confidence: 1.0,
                matched_example: Some(START_COMMAND.to_string()),
            };
        }

        let mut best = Classification::unknown(0.0, None);
        let mut second = Classification::unknown(0.0, None);

        for group in index.groups() {
            for example in &group.examples {
                let score = Self::score(&input_normalized, &input_tokens, example);
                // Strictly-greater comparisons make the first-seen
                // candidate win exact ties.
                if score > best.confidence {
                    second = best;
                    best = Classification {
                        intent: group.name.clone(),
                        confidence: score,
                        matched_example: Some(example.raw.clone()),
                    };
                } else if score > second.confidence {
                    second = Classification {
                        intent: group.name.clone(),
                        confidence: score,
                        matched_example: Some(example.raw.clone()),
                    };
                }
            }
        }

        let margin = best.confidence - second.confidence;
        if best.confidence < options.threshold || margin < options.min_margin {
            return Classification::unknown(best.confidence, best.matched_example);
        }
        best
    }

    fn name(&self) -> &'static str {
        "fuzzy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IntentCatalog;

    fn sample_index() -> CatalogIndex {
        let catalog = IntentCatalog::from_entries([
            ("greeting", vec!["Hola", "Buenas tardes", "Que tal"]),
            ("thanks", vec!["Gracias", "Muchas gracias"]),
            (
                "check_balance",
                vec!["Quiero revisar mi saldo", "Cuanto debo", "saldo"],
            ),
            ("receipt", vec!["Quiero mi recibo", "Descargar mi recibo"]),
        ])
        .unwrap();
        CatalogIndex::build(&catalog)
    }

    fn classify(text: &str) -> Classification {
        FuzzyClassifier::new().classify(text, &sample_index(), &ClassificationOptions::default())
    }

    #[test]
    fn test_exact_match_scores_one() {
        let result = classify("hola");
        assert_eq!(result.intent, "greeting");
        assert!((result.confidence - 1.0).abs() < 1e-9);
        assert_eq!(result.matched_example.as_deref(), Some("Hola"));
    }

    #[test]
    fn test_accented_variant_matches() {
        let result = classify("¡HOLA!");
        assert_eq!(result.intent, "greeting");
        assert!((result.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unrelated_input_is_unknown() {
        let result = classify("xyz completely unrelated");
        assert!(result.is_unknown());
        assert!(result.confidence < 0.62);
    }

    #[test]
    fn test_unknown_surfaces_best_candidate() {
        let result = classify("xyz completely unrelated");
        // Diagnostics keep the rejected best example visible.
        assert!(result.matched_example.is_some());
    }

    #[test]
    fn test_start_command_shortcut() {
        let result = classify("/start");
        assert_eq!(result.intent, "greeting");
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.matched_example.as_deref(), Some("/start"));
    }

    #[test]
    fn test_start_shortcut_ignores_catalog() {
        let empty = CatalogIndex::build(&IntentCatalog::new());
        let result =
            FuzzyClassifier::new().classify(" /START ", &empty, &ClassificationOptions::default());
        assert_eq!(result.intent, "greeting");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_empty_input_is_unknown() {
        let result = classify("");
        assert!(result.is_unknown());
        assert!(result.confidence >= 0.0 && result.confidence <= 1.0);
    }

    #[test]
    fn test_empty_index_is_unknown() {
        let empty = CatalogIndex::build(&IntentCatalog::new());
        let result =
            FuzzyClassifier::new().classify("hola", &empty, &ClassificationOptions::default());
        assert!(result.is_unknown());
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.matched_example, None);
    }

    #[test]
    fn test_margin_rejects_ambiguous_input() {
        // Two intents with near-identical phrasing: the best barely beats
        // the runner-up, so the margin rule forces unknown.
        let catalog = IntentCatalog::from_entries([
            ("order_pizza", vec!["quiero una pizza grande"]),
            ("order_pasta", vec!["quiero una pasta grande"]),
        ])
        .unwrap();
        let index = CatalogIndex::build(&catalog);
        let options = ClassificationOptions::default();

        let result = FuzzyClassifier::new().classify("quiero una grande", &index, &options);
        assert!(result.confidence >= options.threshold);
        assert!(result.is_unknown());
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        let catalog = IntentCatalog::from_entries([
            ("first", vec!["identical phrase"]),
            ("second", vec!["identical phrase"]),
        ])
        .unwrap();
        let index = CatalogIndex::build(&catalog);
        // Margin is zero on an exact tie, so loosen the rule to observe
        // which candidate won.
        let options = ClassificationOptions {
            threshold: 0.5,
            min_margin: 0.0,
        };

        let result = FuzzyClassifier::new().classify("identical phrase", &index, &options);
        assert_eq!(result.intent, "first");
    }

    #[test]
    fn test_containment_bonus_lifts_short_inputs() {
        let index = sample_index();
        let options = ClassificationOptions::default();
        let result = FuzzyClassifier::new().classify("saldo", &index, &options);

        assert_eq!(result.intent, "check_balance");
        assert!((result.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_in_unit_interval() {
        let index = sample_index();
        let options = ClassificationOptions::default();
        for text in [
            "",
            "hola",
            "quiero ver mi recibo por favor",
            "asdf qwerty",
            "/start",
            "1.- saldo",
        ] {
            let result = FuzzyClassifier::new().classify(text, &index, &options);
            assert!(
                (0.0..=1.0).contains(&result.confidence),
                "confidence out of range for {text:?}: {}",
                result.confidence
            );
        }
    }

    #[test]
    fn test_raising_threshold_is_monotonic() {
        let index = sample_index();
        let corpus = [
            "hola",
            "muchas gracias",
            "cuanto debo",
            "quiero mi recibo",
            "algo sin relacion",
            "ver saldo",
        ];

        let accepted_at = |threshold: f64| {
            corpus
                .iter()
                .filter(|text| {
                    let options = ClassificationOptions {
                        threshold,
                        min_margin: 0.06,
                    };
                    !FuzzyClassifier::new().classify(text, &index, &options).is_unknown()
                })
                .count()
        };

        let mut previous = accepted_at(0.0);
        for threshold in [0.2, 0.4, 0.62, 0.8, 1.0] {
            let current = accepted_at(threshold);
            assert!(current <= previous, "acceptance rose at threshold {threshold}");
            previous = current;
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total = WEIGHT_TOKEN_OVERLAP + WEIGHT_EDIT_SIMILARITY + WEIGHT_CONTAINMENT;
        assert!((total - 1.0).abs() < 1e-9);
    }
}
