//! Span definitions per operation: inference, batch evaluation, engine build.

/// Create an inference span.
#[macro_export]
macro_rules! infer_span {
    ($input_count:expr) => {
        tracing::debug_span!("cardiorisk.infer", inputs = $input_count)
    };
}

/// Create a batch evaluation span.
#[macro_export]
macro_rules! evaluate_span {
    ($path:expr) => {
        tracing::info_span!("cardiorisk.evaluate", path = %$path)
    };
}

/// Create an engine construction span.
#[macro_export]
macro_rules! build_span {
    ($rule_count:expr) => {
        tracing::info_span!("cardiorisk.build", rules = $rule_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INFER: &str = "cardiorisk.infer";
    pub const EVALUATE: &str = "cardiorisk.evaluate";
    pub const BUILD: &str = "cardiorisk.build";
}
