//! Fallback weights and categorical centers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Two-level table keyed by variable name, then term name.
pub type TermTable = BTreeMap<String, BTreeMap<String, f64>>;

/// Static scoring tables embedded into the engine at construction.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Fallback weight per dominant (variable, term).
    pub weights: Option<TermTable>,
    /// Representative numeric value per (variable, term) for categorical input.
    pub centers: Option<TermTable>,
}

impl ScoringConfig {
    /// Returns the effective fallback weight table.
    pub fn effective_weights(&self) -> TermTable {
        self.weights.clone().unwrap_or_else(default_weights)
    }

    /// Returns the effective categorical center table.
    pub fn effective_centers(&self) -> TermTable {
        self.centers.clone().unwrap_or_else(default_centers)
    }
}

fn table(rows: &[(&str, &[(&str, f64)])]) -> TermTable {
    rows.iter()
        .map(|(variable, terms)| {
            let terms = terms
                .iter()
                .map(|(term, value)| (term.to_string(), *value))
                .collect();
            (variable.to_string(), terms)
        })
        .collect()
}

/// Default fallback weights. Per-variable maxima sum to 17.
pub fn default_weights() -> TermTable {
    table(&[
        ("Age", &[("Young", 0.0), ("Mid", 1.0), ("Old", 2.0), ("VeryOld", 3.0)]),
        ("BloodPressure", &[("Medium", 0.0), ("High", 1.5), ("VeryHigh", 3.0)]),
        ("HbA1c", &[("VeryHealthy", 0.0), ("Healthy", 1.0), ("High", 2.5)]),
        (
            "LDL",
            &[
                ("VeryHealthy", 0.0),
                ("Healthy", 0.5),
                ("High", 1.5),
                ("VeryHigh", 2.0),
                ("XHigh", 2.5),
            ],
        ),
        ("HDL", &[("Healthy", 0.0), ("Low", 1.5)]),
        ("HeartRate", &[("VeryHealthy", 0.0), ("Healthy", 0.5), ("High", 1.5)]),
        (
            "ChestPain",
            &[("NoPain", 0.0), ("NonAnginal", 1.0), ("Atypical", 2.0), ("Typical", 3.0)],
        ),
    ])
}

/// Default categorical centers.
pub fn default_centers() -> TermTable {
    table(&[
        ("Age", &[("Young", 35.0), ("Mid", 55.0), ("Old", 72.0), ("VeryOld", 90.0)]),
        ("HbA1c", &[("VeryHealthy", 5.2), ("Healthy", 7.5), ("High", 10.0)]),
        (
            "LDL",
            &[
                ("VeryHealthy", 65.0),
                ("Healthy", 90.0),
                ("High", 125.0),
                ("VeryHigh", 165.0),
                ("XHigh", 210.0),
            ],
        ),
        ("HDL", &[("Low", 32.0), ("Healthy", 60.0)]),
        ("HeartRate", &[("VeryHealthy", 62.0), ("Healthy", 82.0), ("High", 130.0)]),
        ("BloodPressure", &[("Medium", 100.0), ("High", 135.0), ("VeryHigh", 175.0)]),
        (
            "ChestPain",
            &[("NoPain", 0.0), ("NonAnginal", 1.0), ("Atypical", 2.0), ("Typical", 3.0)],
        ),
    ])
}
