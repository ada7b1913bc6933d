//! Antecedent/consequent text grammar.
//!
//! ```text
//! antecedent := clause (" AND " clause)*
//! clause     := variable "=" term
//! ```
//!
//! Double quotes are stripped everywhere. Clauses without `=` are dropped.

use cardiorisk_core::constants::CONJUNCTION_TOKEN;

use super::corrections::TermCorrections;
use super::reader::RawRecord;
use super::rule_base::{Condition, Rule};

const QUOTES: &[char] = &['"', '\''];

/// Trim whitespace and surrounding quote characters.
fn clean(text: &str) -> &str {
    text.trim().trim_matches(QUOTES).trim()
}

/// Parse an antecedent into conditions. A variable repeated within one
/// antecedent keeps its first position and its last term.
pub fn parse_antecedent(text: &str, corrections: &TermCorrections) -> Vec<Condition> {
    let unquoted = text.replace('"', "");
    let mut conditions: Vec<Condition> = Vec::new();

    for clause in unquoted.split(CONJUNCTION_TOKEN) {
        let Some((variable, term)) = clause.split_once('=') else {
            continue;
        };
        let variable = clean(variable);
        let term = corrections.correct(clean(term)).to_string();

        match conditions.iter_mut().find(|c| c.variable == variable) {
            Some(existing) => existing.term = term,
            None => conditions.push(Condition {
                variable: variable.to_string(),
                term,
            }),
        }
    }

    conditions
}

/// Parse one record into a rule. Returns `None` when the antecedent or the
/// consequent is empty, or when no clause survives parsing.
pub fn parse_record(record: &RawRecord, corrections: &TermCorrections) -> Option<Rule> {
    if clean(&record.antecedent).is_empty() {
        return None;
    }
    let consequent = record.consequent.replace('"', "");
    let consequent = corrections.correct(clean(&consequent));
    if consequent.is_empty() {
        return None;
    }

    let antecedent = parse_antecedent(&record.antecedent, corrections);
    if antecedent.is_empty() {
        return None;
    }

    Some(Rule::new(antecedent, consequent))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(antecedent: &str, consequent: &str) -> RawRecord {
        RawRecord {
            line: 1,
            antecedent: antecedent.to_string(),
            consequent: consequent.to_string(),
        }
    }

    #[test]
    fn splits_clauses_and_trims() {
        let c = TermCorrections::none();
        let conds = parse_antecedent("\"Age = Old AND  HbA1c=High \"", &c);
        assert_eq!(conds.len(), 2);
        assert_eq!(conds[0].variable, "Age");
        assert_eq!(conds[0].term, "Old");
        assert_eq!(conds[1].variable, "HbA1c");
        assert_eq!(conds[1].term, "High");
    }

    #[test]
    fn clause_without_equals_is_dropped() {
        let c = TermCorrections::none();
        let conds = parse_antecedent("Age=Old AND garbage AND LDL=High", &c);
        let vars: Vec<_> = conds.iter().map(|c| c.variable.as_str()).collect();
        assert_eq!(vars, ["Age", "LDL"]);
    }

    #[test]
    fn splits_on_first_equals_only() {
        let c = TermCorrections::none();
        let conds = parse_antecedent("Age=Old=Really", &c);
        assert_eq!(conds[0].term, "Old=Really");
    }

    #[test]
    fn repeated_variable_keeps_last_term() {
        let c = TermCorrections::none();
        let conds = parse_antecedent("Age=Young AND LDL=High AND Age=Old", &c);
        assert_eq!(conds.len(), 2);
        assert_eq!(conds[0].variable, "Age");
        assert_eq!(conds[0].term, "Old");
    }

    #[test]
    fn corrections_apply_to_terms_and_consequent() {
        let c = TermCorrections::default();
        let rule = parse_record(&record("LDL=VeryHIgh AND Age=Very Old", "HIgh"), &c).unwrap();
        assert_eq!(rule.antecedent()[0].term, "VeryHigh");
        assert_eq!(rule.antecedent()[1].term, "VeryOld");
        assert_eq!(rule.consequent(), "High");
    }

    #[test]
    fn empty_parts_skip_the_record() {
        let c = TermCorrections::none();
        assert!(parse_record(&record("", "HighRisk"), &c).is_none());
        assert!(parse_record(&record("Age=Old", "  "), &c).is_none());
        assert!(parse_record(&record("Age=Old", "\"\""), &c).is_none());
        assert!(parse_record(&record("no clauses here", "HighRisk"), &c).is_none());
    }
}
