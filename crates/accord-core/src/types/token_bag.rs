//! Token bags — multisets of lowercase word tokens.
//!
//! Produced by splitting identifier names or by collecting the operation
//! verbs of a function body. The canonical hash is order-independent and is
//! the key of the embedding cache.

use xxhash_rust::xxh3::Xxh3;

use super::collections::FxHashMap;

/// A multiset of lowercase tokens with occurrence counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBag {
    counts: FxHashMap<String, u32>,
}

impl TokenBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of a token. The token must already be lowercase;
    /// producers (the identifier splitter, the body reducer) guarantee this.
    pub fn add(&mut self, token: &str) {
        self.add_count(token, 1);
    }

    /// Add `count` occurrences of a token.
    pub fn add_count(&mut self, token: &str, count: u32) {
        if count == 0 {
            return;
        }
        *self.counts.entry(token.to_string()).or_insert(0) += count;
    }

    /// Occurrence count for a token (0 if absent).
    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Whether the bag holds no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total occurrences across all tokens.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Iterate over (token, count) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// Content-addressed hash over sorted (token, count) pairs.
    ///
    /// Order-independent by construction: two bags with the same contents
    /// hash identically regardless of insertion order.
    pub fn canonical_hash(&self) -> u64 {
        let mut entries: Vec<(&str, u32)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut hasher = Xxh3::new();
        for (token, count) in entries {
            hasher.update(token.as_bytes());
            hasher.update(&[0u8]);
            hasher.update(&count.to_le_bytes());
        }
        hasher.digest()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TokenBag {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut bag = TokenBag::new();
        for token in iter {
            bag.add(token.as_ref());
        }
        bag
    }
}
