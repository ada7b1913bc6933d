//! Error handling for cardiorisk.
//! One error enum per subsystem, `thiserror` only, no `anyhow` in libraries.

pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod eval_error;
pub mod model_error;
pub mod rule_error;

pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::CardioErrorCode;
pub use eval_error::EvalError;
pub use model_error::ModelError;
pub use rule_error::RuleError;
