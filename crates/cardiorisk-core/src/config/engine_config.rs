//! Inference engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Engine behavior knobs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Score used when defuzzification has nothing to work with. Default: 5.0.
    pub neutral_score: Option<f64>,
    /// Reject rules naming unknown variables or terms instead of keeping
    /// them as never-firing rules. Default: false.
    pub strict_rules: Option<bool>,
}

impl EngineConfig {
    /// Returns the effective neutral score, defaulting to 5.0.
    pub fn effective_neutral_score(&self) -> f64 {
        self.neutral_score.unwrap_or(constants::DEFAULT_NEUTRAL_SCORE)
    }

    /// Returns the effective strict-rules flag, defaulting to false.
    pub fn effective_strict_rules(&self) -> bool {
        self.strict_rules.unwrap_or(false)
    }
}
