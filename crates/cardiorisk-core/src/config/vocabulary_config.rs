//! Label vocabulary configuration: typo and alias corrections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Correction table applied to raw term and category labels before they
/// reach the rule base.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Misspelled or alias label → canonical label. Replaces the default
    /// table entirely when present.
    pub corrections: Option<BTreeMap<String, String>>,
}

impl VocabularyConfig {
    /// Returns the effective correction table.
    pub fn effective_corrections(&self) -> BTreeMap<String, String> {
        self.corrections.clone().unwrap_or_else(default_corrections)
    }
}

/// Corrections observed in the clinical rule and test files.
pub fn default_corrections() -> BTreeMap<String, String> {
    [
        ("HIgh", "High"),
        ("VeryHIgh", "VeryHigh"),
        ("XHIgh", "XHigh"),
        ("Normal", "Medium"),
        ("A typical", "Atypical"),
        ("Very Healthy", "VeryHealthy"),
        ("Very Old", "VeryOld"),
        ("ExtraHigh", "XHigh"),
    ]
    .into_iter()
    .map(|(from, to)| (from.to_string(), to.to_string()))
    .collect()
}
