//! Rule evaluation under the min t-norm.

use crate::rules::{Clause, CompiledRule};

use super::types::{FuzzifiedInput, RuleActivation};

/// Activation of a single rule: the minimum clause degree, or exactly 0 as
/// soon as a clause cannot be looked up.
pub fn activation(rule: &CompiledRule, fuzzified: &FuzzifiedInput) -> f64 {
    let mut degree = 1.0_f64;
    for clause in &rule.clauses {
        let found = match *clause {
            Clause::Resolved { variable, term } => fuzzified.degree(variable, term),
            Clause::Unresolved => None,
        };
        match found {
            Some(d) => degree = degree.min(d),
            None => return 0.0,
        }
    }
    degree
}

/// Activations of every rule that fires with degree > 0, in rule order.
pub fn evaluate(rules: &[CompiledRule], fuzzified: &FuzzifiedInput) -> Vec<RuleActivation> {
    rules
        .iter()
        .filter_map(|rule| {
            let degree = activation(rule, fuzzified);
            (degree > 0.0).then(|| RuleActivation::new(rule.index, degree, rule.consequent.clone()))
        })
        .collect()
}
