//! Rule base errors.
//!
//! Parsing itself never fails: malformed clauses and rows are dropped.
//! These variants cover file access and strict-mode resolution.

use super::error_code::{self, CardioErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("cannot read rule file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("rule {index} references unknown variable {variable}")]
    UnknownVariable { index: usize, variable: String },

    #[error("rule {index} references unknown term {variable}={term}")]
    UnknownTerm {
        index: usize,
        variable: String,
        term: String,
    },

    #[error("rule {index} has unknown consequent {term}")]
    UnknownConsequent { index: usize, term: String },
}

impl CardioErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::RULE_IO_ERROR,
            _ => error_code::RULE_ERROR,
        }
    }
}
