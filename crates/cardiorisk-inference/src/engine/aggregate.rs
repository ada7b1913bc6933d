//! Max–min composition of activated consequents.

use crate::variable::FuzzyVariable;

use super::types::RuleActivation;

/// Clip each consequent curve at its activation degree and fold the clipped
/// curves together with pointwise maximum. Activations naming a term the
/// output variable does not have contribute nothing.
pub fn aggregate(output: &FuzzyVariable, activations: &[RuleActivation]) -> Vec<f64> {
    let mut aggregated = vec![0.0_f64; output.universe().len()];
    for act in activations {
        let Some(curve) = output.membership(&act.consequent) else {
            continue;
        };
        for (acc, &mu) in aggregated.iter_mut().zip(curve) {
            *acc = acc.max(mu.min(act.degree));
        }
    }
    aggregated
}
