//! Membership model errors.

use super::error_code::{self, CardioErrorCode};

/// Errors raised while building universes, membership functions and
/// fuzzy variables. All of them are configuration errors: they surface
/// at engine construction, never per inference call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("invalid universe for {variable}: {reason}")]
    InvalidUniverse { variable: String, reason: String },

    #[error("membership parameters for {variable}.{term} not weakly increasing: ({a}, {b}, {c})")]
    NonIncreasingParameters {
        variable: String,
        term: String,
        a: f64,
        b: f64,
        c: f64,
    },

    #[error("membership parameters for {variable}.{term} are not finite")]
    NonFiniteParameters { variable: String, term: String },

    #[error("duplicate term {term} in variable {variable}")]
    DuplicateTerm { variable: String, term: String },

    #[error("duplicate variable {variable}")]
    DuplicateVariable { variable: String },

    #[error("variable {variable} has no terms")]
    EmptyVariable { variable: String },
}

impl CardioErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_ERROR
    }
}
