//! Shared value types.

pub mod category;
pub mod collections;

pub use category::{CategoryThresholds, RiskCategory};
pub use collections::FxHashMap;
