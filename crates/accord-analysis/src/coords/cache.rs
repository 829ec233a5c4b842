//! Embedding cache: Moka in-memory, keyed by canonical bag hash.
//!
//! Content-addressed — the key carries no file or run identity, so one
//! cache may serve concurrent analyses of different files. Entries are
//! never invalidated within a run; the vocabulary is fixed after startup,
//! so one cache must only ever be paired with one vocabulary.

use moka::sync::Cache;

use accord_core::{Coordinate, TokenBag};

use crate::vocabulary::Vocabulary;

use super::engine::embed;

/// Shared embedding cache. `Clone` shares the underlying store.
#[derive(Clone)]
pub struct EmbedCache {
    inner: Cache<u64, Coordinate>,
}

impl EmbedCache {
    /// Create a cache with the given capacity.
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::new(capacity),
        }
    }

    /// Embed through the cache.
    pub fn get_or_embed(&self, bag: &TokenBag, vocabulary: &Vocabulary) -> Coordinate {
        let key = bag.canonical_hash();
        if let Some(cached) = self.inner.get(&key) {
            return cached;
        }
        let coordinate = embed(bag, vocabulary);
        self.inner.insert(key, coordinate);
        coordinate
    }

    /// Number of cached embeddings.
    pub fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }
}

impl Default for EmbedCache {
    fn default() -> Self {
        // Default: cache up to 10,000 distinct bags
        Self::new(10_000)
    }
}
