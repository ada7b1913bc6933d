//! Weighted dominant-term heuristic used when no rule fires.

use cardiorisk_core::config::TermTable;
use cardiorisk_core::constants::SCORE_MAX;
use cardiorisk_core::types::FxHashMap;

use super::types::FuzzifiedInput;

/// Sums a fixed weight for each variable's dominant term and projects the
/// total onto `[0, 10]`.
#[derive(Debug, Clone)]
pub struct FallbackScorer {
    weights: FxHashMap<String, FxHashMap<String, f64>>,
    normalization: f64,
}

impl FallbackScorer {
    /// The normalization constant is the sum of each variable's largest weight,
    /// so it always tracks the table.
    pub fn new(table: &TermTable) -> Self {
        let normalization: f64 = table
            .values()
            .map(|terms| terms.values().copied().fold(0.0, f64::max))
            .sum();
        let weights = table
            .iter()
            .map(|(variable, terms)| {
                let terms = terms.iter().map(|(t, w)| (t.clone(), *w)).collect();
                (variable.clone(), terms)
            })
            .collect();
        Self {
            weights,
            normalization,
        }
    }

    pub fn normalization(&self) -> f64 {
        self.normalization
    }

    pub fn weight(&self, variable: &str, term: &str) -> Option<f64> {
        self.weights.get(variable)?.get(term).copied()
    }

    /// Raw weighted sum over dominant terms.
    pub fn raw_total(&self, fuzzified: &FuzzifiedInput) -> f64 {
        fuzzified
            .iter()
            .filter_map(|(variable, memberships)| {
                let (term, _) = memberships.dominant()?;
                self.weight(variable, term)
            })
            .fold(0.0, |acc, w| acc + w)
    }

    /// Fallback score, clamped to at most 10. A table whose weights are all
    /// zero scores 0.
    pub fn score(&self, fuzzified: &FuzzifiedInput) -> f64 {
        if self.normalization <= 0.0 {
            return 0.0;
        }
        let normalized = self.raw_total(fuzzified) / self.normalization * SCORE_MAX;
        normalized.min(SCORE_MAX)
    }
}

#[cfg(test)]
mod tests {
    use cardiorisk_core::config::scoring_config::default_weights;

    use super::*;

    #[test]
    fn default_normalization_is_seventeen() {
        let scorer = FallbackScorer::new(&default_weights());
        assert!((scorer.normalization() - 17.0).abs() < 1e-12);
        assert_eq!(scorer.weight("LDL", "XHigh"), Some(2.5));
        assert_eq!(scorer.weight("LDL", "Missing"), None);
    }

    #[test]
    fn normalization_tracks_table_changes() {
        let mut table = default_weights();
        table.get_mut("Age").unwrap().insert("Ancient".to_string(), 5.0);
        let scorer = FallbackScorer::new(&table);
        assert!((scorer.normalization() - 19.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_scores_zero() {
        let scorer = FallbackScorer::new(&default_weights());
        let score = scorer.score(&FuzzifiedInput::default());
        assert_eq!(score, 0.0);
        assert!(score.is_sign_positive(), "empty input must not score -0.0");
        assert_eq!(FallbackScorer::new(&TermTable::new()).score(&FuzzifiedInput::default()), 0.0);
    }
}
