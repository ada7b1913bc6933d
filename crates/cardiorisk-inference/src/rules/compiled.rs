//! Rule compilation: resolve string-keyed rules to `(VariableId, TermId)`
//! conjunctions once, at engine construction.

use cardiorisk_core::errors::RuleError;
use serde::Serialize;
use smallvec::SmallVec;

use super::rule_base::RuleBase;
use crate::variable::{FuzzyVariable, TermId, VariableId, VariableRegistry};

/// One resolved antecedent clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Resolved { variable: VariableId, term: TermId },
    /// Names a variable or term the registry does not know. Evaluates to 0.
    Unresolved,
}

/// A rule ready for evaluation.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Position in the source rule base.
    pub index: usize,
    pub clauses: SmallVec<[Clause; 8]>,
    pub consequent: String,
}

impl CompiledRule {
    /// True when some clause can never be satisfied.
    pub fn never_fires(&self) -> bool {
        self.clauses.iter().any(|c| matches!(c, Clause::Unresolved))
    }
}

/// A rule that compiled with a problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleIssue {
    pub index: usize,
    pub reason: String,
}

/// What compilation made of the loaded rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RuleDiagnostics {
    pub loaded: usize,
    pub compiled: usize,
    /// Kept, but reference unknown antecedent variables or terms.
    pub never_firing: Vec<RuleIssue>,
    /// Removed because their consequent is not an output term.
    pub dropped: Vec<RuleIssue>,
}

/// Compile `rules` against the input registry and output variable.
///
/// Non-strict mode keeps rules with unknown antecedent references as
/// never-firing and drops rules with unknown consequents. Strict mode turns
/// either into an error.
pub fn compile(
    rules: &RuleBase,
    inputs: &VariableRegistry,
    output: &FuzzyVariable,
    strict: bool,
) -> Result<(Vec<CompiledRule>, RuleDiagnostics), RuleError> {
    let mut compiled = Vec::with_capacity(rules.len());
    let mut diagnostics = RuleDiagnostics {
        loaded: rules.len(),
        ..Default::default()
    };

    for (index, rule) in rules.iter().enumerate() {
        if output.term_id(rule.consequent()).is_none() {
            if strict {
                return Err(RuleError::UnknownConsequent {
                    index,
                    term: rule.consequent().to_string(),
                });
            }
            tracing::warn!(index, consequent = rule.consequent(), "dropping rule with unknown consequent");
            diagnostics.dropped.push(RuleIssue {
                index,
                reason: format!("unknown consequent {}", rule.consequent()),
            });
            continue;
        }

        let mut clauses = SmallVec::new();
        let mut problem: Option<String> = None;

        for cond in rule.antecedent() {
            let Some(var_id) = inputs.resolve(&cond.variable) else {
                if strict {
                    return Err(RuleError::UnknownVariable {
                        index,
                        variable: cond.variable.clone(),
                    });
                }
                problem.get_or_insert_with(|| format!("unknown variable {}", cond.variable));
                clauses.push(Clause::Unresolved);
                continue;
            };
            match inputs.get(var_id).term_id(&cond.term) {
                Some(term_id) => clauses.push(Clause::Resolved {
                    variable: var_id,
                    term: term_id,
                }),
                None => {
                    if strict {
                        return Err(RuleError::UnknownTerm {
                            index,
                            variable: cond.variable.clone(),
                            term: cond.term.clone(),
                        });
                    }
                    problem.get_or_insert_with(|| {
                        format!("unknown term {}={}", cond.variable, cond.term)
                    });
                    clauses.push(Clause::Unresolved);
                }
            }
        }

        if let Some(reason) = problem {
            tracing::warn!(index, %reason, "rule can never fire");
            diagnostics.never_firing.push(RuleIssue { index, reason });
        }

        compiled.push(CompiledRule {
            index,
            clauses,
            consequent: rule.consequent().to_string(),
        });
    }

    diagnostics.compiled = compiled.len();
    Ok((compiled, diagnostics))
}
