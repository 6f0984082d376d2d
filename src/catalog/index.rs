//! Precomputed catalog index.

use serde::{Deserialize, Serialize};

use crate::analysis::{normalize, tokenize};
use crate::catalog::IntentCatalog;

/// One example phrase with its precomputed matching forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedExample {
    /// The example phrase exactly as supplied, kept for display.
    pub raw: String,
    /// Canonical form produced by the normalizer.
    pub normalized: String,
    /// Word tokens of the canonical form.
    pub tokens: Vec<String>,
}

impl IndexedExample {
    fn from_phrase(phrase: &str) -> Self {
        IndexedExample {
            raw: phrase.to_string(),
            normalized: normalize(phrase),
            tokens: tokenize(phrase),
        }
    }
}

/// All indexed examples of one intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentGroup {
    /// Intent name.
    pub name: String,
    /// Indexed examples in catalog order.
    pub examples: Vec<IndexedExample>,
}

/// The precomputed structure the classifier scores against.
///
/// Built once per distinct catalog in O(total examples); read-only
/// afterwards, so one index can serve concurrent classification calls
/// without coordination. Group and example order follow the catalog, so
/// iteration order (and thereby tie-breaking) is deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogIndex {
    groups: Vec<IntentGroup>,
}

impl CatalogIndex {
    /// Build an index from a catalog.
    ///
    /// Every example is normalized and tokenized exactly once; identical
    /// example phrases are indexed as-is rather than deduplicated, which
    /// is harmless under max-score tracking.
    pub fn build(catalog: &IntentCatalog) -> Self {
        let groups = catalog
            .iter()
            .map(|entry| IntentGroup {
                name: entry.name.clone(),
                examples: entry
                    .examples
                    .iter()
                    .map(|phrase| IndexedExample::from_phrase(phrase))
                    .collect(),
            })
            .collect();

        CatalogIndex { groups }
    }

    /// Intent groups in catalog order.
    pub fn groups(&self) -> &[IntentGroup] {
        &self.groups
    }

    /// Number of intents in the index.
    pub fn intent_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of indexed examples.
    pub fn example_count(&self) -> usize {
        self.groups.iter().map(|g| g.examples.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> IntentCatalog {
        IntentCatalog::from_entries([
            ("greeting", vec!["Hola", "Buenas tardes"]),
            ("check_balance", vec!["¿Cuánto debo?", "1.- Saldo"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_build_preserves_order() {
        let index = CatalogIndex::build(&sample_catalog());

        assert_eq!(index.intent_count(), 2);
        assert_eq!(index.groups()[0].name, "greeting");
        assert_eq!(index.groups()[1].name, "check_balance");
        assert_eq!(index.groups()[0].examples[0].raw, "Hola");
        assert_eq!(index.groups()[0].examples[1].raw, "Buenas tardes");
    }

    #[test]
    fn test_examples_normalized_and_tokenized() {
        let index = CatalogIndex::build(&sample_catalog());
        let balance = &index.groups()[1];

        assert_eq!(balance.examples[0].raw, "¿Cuánto debo?");
        assert_eq!(balance.examples[0].normalized, "cuanto debo");
        assert_eq!(balance.examples[0].tokens, vec!["cuanto", "debo"]);
        assert_eq!(balance.examples[1].normalized, "1.- saldo");
    }

    #[test]
    fn test_duplicates_kept() {
        let catalog =
            IntentCatalog::from_entries([("thanks", vec!["gracias", "gracias"])]).unwrap();
        let index = CatalogIndex::build(&catalog);
        assert_eq!(index.example_count(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let index = CatalogIndex::build(&IntentCatalog::new());
        assert_eq!(index.intent_count(), 0);
        assert_eq!(index.example_count(), 0);
    }
}
