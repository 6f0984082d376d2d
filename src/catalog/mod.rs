//! Intent catalogs and their precomputed index.
//!
//! An [`IntentCatalog`] maps intent names to example phrases and
//! preserves insertion order, which in turn fixes the deterministic
//! iteration order of the [`CatalogIndex`] built from it. Catalogs
//! serialize to and from plain JSON objects
//! (`{"greeting": ["Hola", ...], ...}`), so the on-disk format matches
//! what callers already send over the wire.

pub mod cache;
pub mod index;

pub use cache::IndexCache;
pub use index::{CatalogIndex, IndexedExample, IntentGroup};

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TinoError};

/// One named intent with its example phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentEntry {
    /// Intent name, non-empty and unique within its catalog.
    pub name: String,
    /// Example phrases, each non-empty. May be empty; an intent without
    /// examples simply never matches.
    pub examples: Vec<String>,
}

/// An ordered mapping from intent names to example phrases.
///
/// Immutable for the duration of one index build; construction validates
/// that names are non-empty and unique and that no example phrase is
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntentCatalog {
    entries: Vec<IntentEntry>,
}

impl IntentCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        IntentCatalog::default()
    }

    /// Build a catalog from `(name, examples)` pairs, preserving order.
    pub fn from_entries<N, E>(pairs: impl IntoIterator<Item = (N, Vec<E>)>) -> Result<Self>
    where
        N: Into<String>,
        E: Into<String>,
    {
        let mut catalog = IntentCatalog::new();
        for (name, examples) in pairs {
            catalog.insert(name, examples.into_iter().map(Into::into).collect())?;
        }
        Ok(catalog)
    }

    /// Append one intent with its examples.
    ///
    /// Returns a catalog error if the name is empty or duplicates an
    /// existing intent, or if any example phrase is empty.
    pub fn insert<N: Into<String>>(&mut self, name: N, examples: Vec<String>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(TinoError::catalog("intent name must be non-empty"));
        }
        if self.entries.iter().any(|e| e.name == name) {
            return Err(TinoError::catalog(format!(
                "duplicate intent name '{name}'"
            )));
        }
        if examples.iter().any(String::is_empty) {
            return Err(TinoError::catalog(format!(
                "intent '{name}' has an empty example phrase"
            )));
        }
        self.entries.push(IntentEntry { name, examples });
        Ok(())
    }

    /// Parse a catalog from a JSON object string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &IntentEntry> {
        self.entries.iter()
    }

    /// Intent names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Number of intents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no intents.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of example phrases across all intents.
    pub fn example_count(&self) -> usize {
        self.entries.iter().map(|e| e.examples.len()).sum()
    }

    /// Deterministic JSON serialization, usable as a cache key.
    ///
    /// Two catalogs with the same intents, examples, and order produce
    /// the same string.
    pub fn canonical_json(&self) -> String {
        // Serialization of an in-memory catalog cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Serialize for IntentCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.examples)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IntentCatalog {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = IntentCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from intent names to arrays of example phrases")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut catalog = IntentCatalog::new();
                while let Some((name, examples)) =
                    access.next_entry::<String, Vec<String>>()?
                {
                    catalog
                        .insert(name, examples)
                        .map_err(serde::de::Error::custom)?;
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries_preserves_order() {
        let catalog = IntentCatalog::from_entries([
            ("zeta", vec!["z"]),
            ("alpha", vec!["a"]),
            ("mid", vec!["m"]),
        ])
        .unwrap();

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.example_count(), 3);
    }

    #[test]
    fn test_insert_rejects_empty_name() {
        let mut catalog = IntentCatalog::new();
        assert!(catalog.insert("", vec!["hola".to_string()]).is_err());
    }

    #[test]
    fn test_insert_rejects_duplicate_name() {
        let mut catalog = IntentCatalog::new();
        catalog.insert("greeting", vec!["hola".to_string()]).unwrap();
        let err = catalog.insert("greeting", vec![]).unwrap_err();
        assert!(err.to_string().contains("duplicate intent name"));
    }

    #[test]
    fn test_insert_rejects_empty_example() {
        let mut catalog = IntentCatalog::new();
        let err = catalog
            .insert("greeting", vec!["hola".to_string(), String::new()])
            .unwrap_err();
        assert!(err.to_string().contains("empty example phrase"));
    }

    #[test]
    fn test_intent_without_examples_is_legal() {
        let mut catalog = IntentCatalog::new();
        catalog.insert("placeholder", vec![]).unwrap();
        assert_eq!(catalog.example_count(), 0);
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let json = r#"{"greeting":["Hola","Buenas tardes"],"thanks":["Gracias"]}"#;
        let catalog = IntentCatalog::from_json_str(json).unwrap();

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["greeting", "thanks"]);
        assert_eq!(catalog.canonical_json(), json);
    }

    #[test]
    fn test_from_json_rejects_malformed_shapes() {
        // Top-level array instead of object.
        assert!(IntentCatalog::from_json_str(r#"["greeting"]"#).is_err());
        // Intent value that is not an array of strings.
        assert!(IntentCatalog::from_json_str(r#"{"greeting":"Hola"}"#).is_err());
        assert!(IntentCatalog::from_json_str(r#"{"greeting":[1,2]}"#).is_err());
    }

    #[test]
    fn test_canonical_json_deterministic() {
        let a = IntentCatalog::from_entries([("x", vec!["one", "two"])]).unwrap();
        let b = IntentCatalog::from_entries([("x", vec!["one", "two"])]).unwrap();
        assert_eq!(a.canonical_json(), b.canonical_json());

        let reordered = IntentCatalog::from_entries([("x", vec!["two", "one"])]).unwrap();
        assert_ne!(a.canonical_json(), reordered.canonical_json());
    }
}
