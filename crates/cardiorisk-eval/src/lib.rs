//! # cardiorisk-eval
//!
//! Batch evaluation of a cardiorisk engine against a labelled test file, plus
//! the metrics and text rendering used by the `cardiorisk` binary.

pub mod harness;
pub mod input;
pub mod metrics;
pub mod report;

pub use harness::{evaluate_cases, evaluate_file, parse_cases, CaseOutcome, EvaluationReport, TestCase};
pub use input::{InputError, PatientInputs};
pub use metrics::{AverageMetrics, ClassMetrics, ClassificationReport, ConfusionMatrix};
