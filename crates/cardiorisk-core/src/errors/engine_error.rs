//! Engine construction errors.

use super::{CardioErrorCode, ConfigError, ModelError, RuleError};

/// Errors that abort engine initialization.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CardioErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Model(e) => e.error_code(),
            Self::Rule(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
