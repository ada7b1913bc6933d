//! Configuration system for cardiorisk.
//! TOML-based, 3-layer resolution: overrides > env > project file > defaults.

pub mod cardio_config;
pub mod category_config;
pub mod engine_config;
pub mod scoring_config;
pub mod vocabulary_config;

pub use cardio_config::{CardioConfig, ConfigOverrides};
pub use category_config::CategoryConfig;
pub use engine_config::EngineConfig;
pub use scoring_config::{ScoringConfig, TermTable};
pub use vocabulary_config::VocabularyConfig;
