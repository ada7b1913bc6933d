//! # cardiorisk-core
//!
//! Foundation crate for the cardiorisk workspace.
//! Defines shared types, errors, config, tracing setup, and constants.
//! The inference engine and the evaluation harness both depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::CardioConfig;
pub use errors::{CardioErrorCode, EngineError};
pub use types::RiskCategory;
