//! Typo and alias normalization for raw labels.

use cardiorisk_core::config::vocabulary_config::{default_corrections, VocabularyConfig};
use cardiorisk_core::types::FxHashMap;

/// Exact-match label correction table. Unmapped labels pass through.
#[derive(Debug, Clone, PartialEq)]
pub struct TermCorrections {
    table: FxHashMap<String, String>,
}

impl TermCorrections {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            table: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// A table that corrects nothing.
    pub fn none() -> Self {
        Self {
            table: FxHashMap::default(),
        }
    }

    pub fn from_config(config: &VocabularyConfig) -> Self {
        Self::new(config.effective_corrections())
    }

    /// Canonical form of `label`.
    pub fn correct<'a>(&'a self, label: &'a str) -> &'a str {
        self.table.get(label).map(String::as_str).unwrap_or(label)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for TermCorrections {
    fn default() -> Self {
        Self::new(default_corrections())
    }
}
