//! Discrete risk categories and score breakpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants;

/// One of the four output labels, ordered by increasing risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskCategory {
    Healthy,
    LowRisk,
    MediumRisk,
    HighRisk,
}

impl RiskCategory {
    /// All categories in risk order. Also the confusion-matrix label order.
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::Healthy,
        RiskCategory::LowRisk,
        RiskCategory::MediumRisk,
        RiskCategory::HighRisk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::LowRisk => "LowRisk",
            Self::MediumRisk => "MediumRisk",
            Self::HighRisk => "HighRisk",
        }
    }

    /// Position inside [`RiskCategory::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Healthy => 0,
            Self::LowRisk => 1,
            Self::MediumRisk => 2,
            Self::HighRisk => 3,
        }
    }

    /// One-line guidance shown next to the category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Healthy => "Low risk factors",
            Self::LowRisk => "Lifestyle changes recommended",
            Self::MediumRisk => "Specialist follow-up required",
            Self::HighRisk => "Urgent medical evaluation",
        }
    }

    /// Parse an exact canonical label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label that names none of the four categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown risk category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for RiskCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Half-open score bands: `[.., healthy_below)`, `[healthy_below, low_risk_below)`,
/// `[low_risk_below, medium_risk_below)`, `[medium_risk_below, ..)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryThresholds {
    pub healthy_below: f64,
    pub low_risk_below: f64,
    pub medium_risk_below: f64,
}

impl CategoryThresholds {
    pub fn classify(&self, score: f64) -> RiskCategory {
        if score < self.healthy_below {
            RiskCategory::Healthy
        } else if score < self.low_risk_below {
            RiskCategory::LowRisk
        } else if score < self.medium_risk_below {
            RiskCategory::MediumRisk
        } else {
            RiskCategory::HighRisk
        }
    }
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            healthy_below: constants::DEFAULT_HEALTHY_BELOW,
            low_risk_below: constants::DEFAULT_LOW_RISK_BELOW,
            medium_risk_below: constants::DEFAULT_MEDIUM_RISK_BELOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_half_open() {
        let t = CategoryThresholds::default();
        assert_eq!(t.classify(2.999), RiskCategory::Healthy);
        assert_eq!(t.classify(3.0), RiskCategory::LowRisk);
        assert_eq!(t.classify(4.999), RiskCategory::LowRisk);
        assert_eq!(t.classify(5.0), RiskCategory::MediumRisk);
        assert_eq!(t.classify(6.999), RiskCategory::MediumRisk);
        assert_eq!(t.classify(7.0), RiskCategory::HighRisk);
        assert_eq!(t.classify(10.0), RiskCategory::HighRisk);
    }

    #[test]
    fn labels_round_trip() {
        for c in RiskCategory::ALL {
            assert_eq!(c.as_str().parse::<RiskCategory>().unwrap(), c);
            assert_eq!(RiskCategory::ALL[c.index()], c);
        }
        assert!("Unknown".parse::<RiskCategory>().is_err());
    }

    #[test]
    fn every_category_has_a_description() {
        for c in RiskCategory::ALL {
            assert!(!c.description().is_empty());
        }
        assert_eq!(RiskCategory::HighRisk.description(), "Urgent medical evaluation");
    }
}
