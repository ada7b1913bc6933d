//! Rule value objects and the ordered rule base.

use std::fmt;
use std::path::Path;

use cardiorisk_core::errors::RuleError;
use serde::Serialize;

use super::corrections::TermCorrections;
use super::parser;
use super::reader::{self, RawRecord};

/// One `variable = term` clause of an antecedent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Condition {
    pub variable: String,
    pub term: String,
}

impl Condition {
    pub fn new(variable: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            term: term.into(),
        }
    }
}

/// IF conjunction-of-conditions THEN consequent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    antecedent: Vec<Condition>,
    consequent: String,
}

impl Rule {
    pub fn new(antecedent: Vec<Condition>, consequent: impl Into<String>) -> Self {
        Self {
            antecedent,
            consequent: consequent.into(),
        }
    }

    /// Shorthand for building rules in code: `Rule::of(&[("Age", "Old")], "HighRisk")`.
    pub fn of(conditions: &[(&str, &str)], consequent: &str) -> Self {
        Self::new(
            conditions
                .iter()
                .map(|(v, t)| Condition::new(*v, *t))
                .collect(),
            consequent,
        )
    }

    pub fn antecedent(&self) -> &[Condition] {
        &self.antecedent
    }

    pub fn consequent(&self) -> &str {
        &self.consequent
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IF ")?;
        for (i, c) in self.antecedent.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{}={}", c.variable, c.term)?;
        }
        write!(f, " THEN {}", self.consequent)
    }
}

/// Rules in load order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rule base from raw records.
    pub fn from_records<I>(records: I, corrections: &TermCorrections) -> Self
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut base = Self::new();
        base.load_records(records, corrections);
        base
    }

    /// Read a delimited rule file.
    pub fn from_path(path: &Path, corrections: &TermCorrections) -> Result<Self, RuleError> {
        let records = reader::read_delimited(path).map_err(|source| RuleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let base = Self::from_records(records, corrections);
        tracing::info!(path = %path.display(), rules = base.len(), "loaded rule file");
        Ok(base)
    }

    /// Append every record that parses. Returns the total rule count.
    pub fn load_records<I>(&mut self, records: I, corrections: &TermCorrections) -> usize
    where
        I: IntoIterator<Item = RawRecord>,
    {
        for record in records {
            match parser::parse_record(&record, corrections) {
                Some(rule) => self.rules.push(rule),
                None => tracing::trace!(line = record.line, "skipping unparsable rule record"),
            }
        }
        self.rules.len()
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleBase {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleBase {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
