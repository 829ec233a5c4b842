//! The vocabulary table: lowercase token → axis.
//!
//! Built once at startup through a validating builder and immutable
//! afterwards, so lookups need no synchronization. A token mapped to two
//! different axes within one construction pass is a build-time defect and
//! fails construction — lookups can never observe an inconsistent table.

pub mod defaults;

use accord_core::{Axis, FxHashMap, VocabularyError};

use defaults::DEFAULT_ENTRIES;

/// The immutable token → axis table.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: FxHashMap<String, Axis>,
}

impl Vocabulary {
    /// Start building a table from scratch.
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder {
            entries: Vec::new(),
        }
    }

    /// The fixed built-in table.
    pub fn default_table() -> Vocabulary {
        let mut builder = Self::builder();
        for (token, axis) in DEFAULT_ENTRIES {
            builder.insert(token, *axis);
        }
        builder
            .build()
            .expect("built-in vocabulary table is conflict-free")
    }

    /// Axis for a token, if the token is in the table. Case-insensitive.
    pub fn lookup(&self, token: &str) -> Option<Axis> {
        if token.chars().any(|c| c.is_uppercase()) {
            return self.entries.get(token.to_lowercase().as_str()).copied();
        }
        self.entries.get(token).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries sorted by token, for dumps and reproducibility.
    pub fn entries(&self) -> Vec<(&str, Axis)> {
        let mut all: Vec<(&str, Axis)> = self
            .entries
            .iter()
            .map(|(t, &a)| (t.as_str(), a))
            .collect();
        all.sort_unstable_by(|a, b| a.0.cmp(b.0));
        all
    }

    /// Derive a new table with extra entries layered on top.
    ///
    /// An override entry replaces a built-in mapping for the same token;
    /// two conflicting mappings *within the override set* are still a
    /// construction defect and fail.
    pub fn extend<I>(&self, overrides: I) -> Result<Vocabulary, VocabularyError>
    where
        I: IntoIterator<Item = (String, Axis)>,
    {
        let mut entries = self.entries.clone();
        let mut seen: FxHashMap<String, Axis> = FxHashMap::default();
        for (token, axis) in overrides {
            let token = token.to_lowercase();
            if token.is_empty() {
                return Err(VocabularyError::EmptyToken);
            }
            if let Some(&first) = seen.get(&token) {
                if first != axis {
                    return Err(VocabularyError::AxisConflict {
                        token,
                        first,
                        second: axis,
                    });
                }
            }
            seen.insert(token.clone(), axis);
            entries.insert(token, axis);
        }
        Ok(Vocabulary { entries })
    }
}

/// Accumulates entries, then validates the whole set at `build` time.
#[derive(Debug)]
pub struct VocabularyBuilder {
    entries: Vec<(String, Axis)>,
}

impl VocabularyBuilder {
    /// Queue one entry. The token is lowercased on insertion.
    pub fn insert(&mut self, token: &str, axis: Axis) -> &mut Self {
        self.entries.push((token.to_lowercase(), axis));
        self
    }

    /// Validate and freeze the table.
    ///
    /// Duplicate (token, axis) pairs collapse silently; the same token with
    /// two different axes is an `AxisConflict`.
    pub fn build(self) -> Result<Vocabulary, VocabularyError> {
        let mut entries: FxHashMap<String, Axis> = FxHashMap::default();
        for (token, axis) in self.entries {
            if token.is_empty() {
                return Err(VocabularyError::EmptyToken);
            }
            match entries.get(&token) {
                Some(&first) if first != axis => {
                    return Err(VocabularyError::AxisConflict {
                        token,
                        first,
                        second: axis,
                    });
                }
                _ => {
                    entries.insert(token, axis);
                }
            }
        }
        Ok(Vocabulary { entries })
    }
}
