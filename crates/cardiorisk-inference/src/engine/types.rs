//! Per-call inference artifacts.

use serde::ser::{Serialize, Serializer};

use cardiorisk_core::RiskCategory;

use crate::variable::{TermId, VariableId};

/// Degrees of one value in each term of a variable, in definition order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Memberships {
    entries: Vec<(String, f64)>,
}

impl Memberships {
    pub fn from_entries(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == term)
            .map(|(_, d)| *d)
    }

    pub fn at(&self, term: TermId) -> Option<f64> {
        self.entries.get(term.0).map(|(_, d)| *d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, d)| (name.as_str(), *d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Strictly highest degree; ties keep the earliest term.
    pub fn dominant(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (name, degree) in self.iter() {
            match best {
                Some((_, d)) if degree <= d => {}
                _ => best = Some((name, degree)),
            }
        }
        best
    }
}

impl Serialize for Memberships {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Fuzzified value of every recognized input, slotted by variable id so
/// output order follows the engine's variable order, not the caller's.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuzzifiedInput {
    slots: Vec<Option<(String, Memberships)>>,
}

impl FuzzifiedInput {
    pub(crate) fn with_slots(count: usize) -> Self {
        Self {
            slots: vec![None; count],
        }
    }

    pub(crate) fn insert(&mut self, id: VariableId, name: &str, memberships: Memberships) {
        self.slots[id.0] = Some((name.to_string(), memberships));
    }

    pub fn get(&self, variable: &str) -> Option<&Memberships> {
        self.iter().find(|(name, _)| *name == variable).map(|(_, m)| m)
    }

    /// Degree of a resolved clause; `None` if the variable was not supplied.
    pub fn degree(&self, variable: VariableId, term: TermId) -> Option<f64> {
        self.slots
            .get(variable.0)?
            .as_ref()
            .and_then(|(_, m)| m.at(term))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Memberships)> {
        self.slots
            .iter()
            .flatten()
            .map(|(name, m)| (name.as_str(), m))
    }

    /// Number of variables present.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for FuzzifiedInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Degree to which one rule fired, and what it endorses.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RuleActivation {
    /// Load-order index of the rule.
    pub rule_index: usize,
    pub degree: f64,
    pub consequent: String,
}

impl RuleActivation {
    pub fn new(rule_index: usize, degree: f64, consequent: impl Into<String>) -> Self {
        Self {
            rule_index,
            degree,
            consequent: consequent.into(),
        }
    }
}

/// Which path produced the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InferencePath {
    Rules,
    Fallback,
}

/// Everything one inference call produces. Owned by the caller.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct InferenceResult {
    pub score: f64,
    pub category: RiskCategory,
    pub fuzzified: FuzzifiedInput,
    /// Empty on the fallback path.
    pub activations: Vec<RuleActivation>,
    pub path: InferencePath,
}

impl InferenceResult {
    pub fn is_fallback(&self) -> bool {
        self.path == InferencePath::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(entries: &[(&str, f64)]) -> Memberships {
        Memberships::from_entries(entries.iter().map(|(n, d)| (n.to_string(), *d)).collect())
    }

    #[test]
    fn dominant_prefers_first_on_ties() {
        let mem = m(&[("Low", 0.4), ("Mid", 0.7), ("High", 0.7)]);
        assert_eq!(mem.dominant(), Some(("Mid", 0.7)));

        let zeros = m(&[("Young", 0.0), ("Old", 0.0)]);
        assert_eq!(zeros.dominant(), Some(("Young", 0.0)));

        assert_eq!(Memberships::default().dominant(), None);
    }

    #[test]
    fn serializes_as_ordered_map() {
        let mem = m(&[("b", 0.5), ("a", 1.0)]);
        let json = serde_json::to_string(&mem).unwrap();
        assert_eq!(json, r#"{"b":0.5,"a":1.0}"#);
    }
}
