//! CardioErrorCode trait for boundary conversion.

/// Structured error code for every cardiorisk error enum.
/// Adapters (CLI, JSON output) use it to tag failures without
/// matching on variants.
pub trait CardioErrorCode {
    /// Returns the error code string (e.g., "MODEL_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const RULE_ERROR: &str = "RULE_ERROR";
pub const RULE_IO_ERROR: &str = "RULE_IO_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EVAL_ERROR: &str = "EVAL_ERROR";
pub const EVAL_IO_ERROR: &str = "EVAL_IO_ERROR";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
