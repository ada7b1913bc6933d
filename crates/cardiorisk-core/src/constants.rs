/// cardiorisk version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the single output variable.
pub const OUTPUT_VARIABLE: &str = "Risk";

/// Score returned when defuzzification has nothing to work with.
pub const DEFAULT_NEUTRAL_SCORE: f64 = 5.0;

/// Upper bound of the nominal score range.
pub const SCORE_MAX: f64 = 10.0;

/// Default category breakpoints.
pub const DEFAULT_HEALTHY_BELOW: f64 = 3.0;
pub const DEFAULT_LOW_RISK_BELOW: f64 = 5.0;
pub const DEFAULT_MEDIUM_RISK_BELOW: f64 = 7.0;

/// Literal conjunction token between antecedent clauses.
pub const CONJUNCTION_TOKEN: &str = " AND ";

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "cardiorisk.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CARDIORISK_LOG";
