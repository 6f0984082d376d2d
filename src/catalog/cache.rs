//! Build-once cache for catalog indexes.

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::catalog::{CatalogIndex, IntentCatalog};

/// Cache of built [`CatalogIndex`] values keyed by the catalog's
/// canonical JSON serialization.
///
/// Purely a throughput optimization for callers that classify against
/// the same catalog repeatedly; rebuilding an index is always correct,
/// only wasteful. Indexes are handed out as `Arc`s, so cached entries
/// stay usable after eviction via [`clear`](IndexCache::clear).
#[derive(Debug, Default)]
pub struct IndexCache {
    entries: RwLock<AHashMap<String, Arc<CatalogIndex>>>,
}

impl IndexCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        IndexCache::default()
    }

    /// Return the cached index for `catalog`, building and inserting it
    /// on first use.
    ///
    /// A concurrent first call for the same catalog may build the index
    /// twice; the write lock makes one result win and both callers
    /// observe a fully built index.
    pub fn get_or_build(&self, catalog: &IntentCatalog) -> Arc<CatalogIndex> {
        let key = catalog.canonical_json();

        if let Some(index) = self.entries.read().get(&key) {
            return Arc::clone(index);
        }

        let built = Arc::new(CatalogIndex::build(catalog));
        let mut entries = self.entries.write();
        Arc::clone(entries.entry(key).or_insert(built))
    }

    /// Number of cached indexes.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop all cached indexes.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
