//! Linguistic-input projection onto representative numeric centers.

use cardiorisk_core::config::TermTable;
use cardiorisk_core::types::FxHashMap;

#[derive(Debug, Clone)]
pub struct CategoricalCenters {
    centers: FxHashMap<String, FxHashMap<String, f64>>,
}

impl CategoricalCenters {
    pub fn new(table: &TermTable) -> Self {
        let centers = table
            .iter()
            .map(|(variable, terms)| {
                let terms = terms.iter().map(|(t, c)| (t.clone(), *c)).collect();
                (variable.clone(), terms)
            })
            .collect();
        Self { centers }
    }

    pub fn center(&self, variable: &str, term: &str) -> Option<f64> {
        self.centers.get(variable)?.get(term).copied()
    }

    /// Numeric inputs for every known `(variable, term)` pair; unknown pairs
    /// are dropped.
    pub fn project<I, K, T>(&self, inputs: I) -> Vec<(String, f64)>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: AsRef<str>,
    {
        inputs
            .into_iter()
            .filter_map(|(variable, term)| {
                let (variable, term) = (variable.as_ref(), term.as_ref());
                match self.center(variable, term) {
                    Some(c) => Some((variable.to_string(), c)),
                    None => {
                        tracing::trace!(variable, term, "dropping unknown categorical input");
                        None
                    }
                }
            })
            .collect()
    }
}
