//! Category breakpoint configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::types::CategoryThresholds;

/// Score breakpoints separating the four risk categories.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CategoryConfig {
    /// Scores below this are Healthy. Default: 3.0.
    pub healthy_below: Option<f64>,
    /// Scores below this are LowRisk. Default: 5.0.
    pub low_risk_below: Option<f64>,
    /// Scores below this are MediumRisk, the rest HighRisk. Default: 7.0.
    pub medium_risk_below: Option<f64>,
}

impl CategoryConfig {
    pub fn effective_thresholds(&self) -> CategoryThresholds {
        CategoryThresholds {
            healthy_below: self
                .healthy_below
                .unwrap_or(constants::DEFAULT_HEALTHY_BELOW),
            low_risk_below: self
                .low_risk_below
                .unwrap_or(constants::DEFAULT_LOW_RISK_BELOW),
            medium_risk_below: self
                .medium_risk_below
                .unwrap_or(constants::DEFAULT_MEDIUM_RISK_BELOW),
        }
    }
}
