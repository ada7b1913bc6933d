//! Batch evaluation errors.

use super::error_code::{self, CardioErrorCode};
use super::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("cannot read test file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("test set {path} has no usable rows")]
    EmptyTestSet { path: String },

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

impl CardioErrorCode for EvalError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::EVAL_IO_ERROR,
            Self::EmptyTestSet { .. } => error_code::EVAL_ERROR,
            Self::Engine(e) => e.error_code(),
        }
    }
}
