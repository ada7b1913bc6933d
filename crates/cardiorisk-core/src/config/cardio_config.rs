//! Top-level cardiorisk configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CategoryConfig, EngineConfig, ScoringConfig, VocabularyConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`CARDIORISK_*`)
/// 3. Project config (`cardiorisk.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CardioConfig {
    pub engine: EngineConfig,
    pub categories: CategoryConfig,
    pub scoring: ScoringConfig,
    pub vocabulary: VocabularyConfig,
}

/// Override arguments that take precedence over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub neutral_score: Option<f64>,
    pub strict_rules: Option<bool>,
}

impl CardioConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(constants::CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);

        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load a single explicit config file over the defaults, then apply
    /// environment overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        Self::merge_toml_file(&mut config, path)?;
        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CardioConfig) -> Result<(), ConfigError> {
        let neutral = config.engine.effective_neutral_score();
        if !neutral.is_finite() || !(0.0..=constants::SCORE_MAX).contains(&neutral) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.neutral_score".to_string(),
                message: format!("must be between 0.0 and {}", constants::SCORE_MAX),
            });
        }

        let t = config.categories.effective_thresholds();
        let ordered = t.healthy_below.is_finite()
            && t.medium_risk_below.is_finite()
            && t.healthy_below < t.low_risk_below
            && t.low_risk_below < t.medium_risk_below;
        if !ordered {
            return Err(ConfigError::ValidationFailed {
                field: "categories".to_string(),
                message: "breakpoints must be finite and strictly increasing".to_string(),
            });
        }

        for (variable, terms) in &config.scoring.effective_weights() {
            for (term, weight) in terms {
                if !weight.is_finite() || *weight < 0.0 {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("scoring.weights.{variable}.{term}"),
                        message: "must be a finite, non-negative number".to_string(),
                    });
                }
            }
        }

        for (variable, terms) in &config.scoring.effective_centers() {
            for (term, center) in terms {
                if !center.is_finite() {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("scoring.centers.{variable}.{term}"),
                        message: "must be a finite number".to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    fn merge_toml_file(config: &mut CardioConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CardioConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`: every field set in `other` wins.
    fn merge(base: &mut CardioConfig, other: &CardioConfig) {
        // Engine
        if other.engine.neutral_score.is_some() {
            base.engine.neutral_score = other.engine.neutral_score;
        }
        if other.engine.strict_rules.is_some() {
            base.engine.strict_rules = other.engine.strict_rules;
        }

        // Categories
        if other.categories.healthy_below.is_some() {
            base.categories.healthy_below = other.categories.healthy_below;
        }
        if other.categories.low_risk_below.is_some() {
            base.categories.low_risk_below = other.categories.low_risk_below;
        }
        if other.categories.medium_risk_below.is_some() {
            base.categories.medium_risk_below = other.categories.medium_risk_below;
        }

        // Scoring
        if other.scoring.weights.is_some() {
            base.scoring.weights = other.scoring.weights.clone();
        }
        if other.scoring.centers.is_some() {
            base.scoring.centers = other.scoring.centers.clone();
        }

        // Vocabulary
        if other.vocabulary.corrections.is_some() {
            base.vocabulary.corrections = other.vocabulary.corrections.clone();
        }
    }

    /// Apply `CARDIORISK_*` environment variables. Unparsable values are ignored.
    fn apply_env_overrides(config: &mut CardioConfig) {
        if let Ok(val) = std::env::var("CARDIORISK_NEUTRAL_SCORE") {
            if let Ok(v) = val.parse::<f64>() {
                config.engine.neutral_score = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CARDIORISK_STRICT_RULES") {
            if let Ok(v) = val.parse::<bool>() {
                config.engine.strict_rules = Some(v);
            }
        }
    }

    fn apply_overrides(config: &mut CardioConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.neutral_score {
            config.engine.neutral_score = Some(v);
        }
        if let Some(v) = overrides.strict_rules {
            config.engine.strict_rules = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
