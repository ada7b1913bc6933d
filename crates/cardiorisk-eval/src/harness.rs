//! Batch evaluation of a labelled test file against an engine.

use std::path::Path;

use cardiorisk_core::errors::EvalError;
use cardiorisk_core::RiskCategory;
use cardiorisk_inference::rules::{parse_antecedent, read_delimited};
use cardiorisk_inference::{InferenceEngine, InferencePath, RawRecord, TermCorrections};
use rayon::prelude::*;
use serde::Serialize;

use crate::metrics::{ClassificationReport, ConfusionMatrix};

/// One usable test row.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub line: usize,
    pub inputs: Vec<(String, String)>,
    pub expected: String,
}

/// What the engine said about one test row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseOutcome {
    pub line: usize,
    pub expected: String,
    pub predicted: RiskCategory,
    pub score: f64,
    pub path: InferencePath,
}

impl CaseOutcome {
    /// `None` when the expected label is not a known category.
    pub fn is_correct(&self) -> Option<bool> {
        RiskCategory::from_label(&self.expected).map(|c| c == self.predicted)
    }
}

/// Result of one batch evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub rule_count: usize,
    pub rows_evaluated: usize,
    pub rows_skipped: usize,
    /// Rows whose expected label is not one of the four categories. They are
    /// evaluated but left out of the metrics.
    pub unknown_labels: usize,
    pub accuracy: f64,
    pub report: ClassificationReport,
    pub confusion: ConfusionMatrix,
    pub outcomes: Vec<CaseOutcome>,
}

/// Turn raw rows into test cases. Returns the cases and the number of rows
/// skipped for an empty antecedent or label.
pub fn parse_cases<I>(records: I, corrections: &TermCorrections) -> (Vec<TestCase>, usize)
where
    I: IntoIterator<Item = RawRecord>,
{
    let mut cases = Vec::new();
    let mut skipped = 0;

    for record in records {
        let antecedent = record.antecedent.replace('"', "");
        let label = record.consequent.replace('"', "");
        let label = label.trim();
        if antecedent.trim().is_empty() || label.is_empty() {
            tracing::trace!(line = record.line, "skipping incomplete test row");
            skipped += 1;
            continue;
        }

        let inputs = parse_antecedent(&antecedent, corrections)
            .into_iter()
            .map(|c| (c.variable, c.term))
            .collect();
        cases.push(TestCase {
            line: record.line,
            inputs,
            expected: corrections.correct(label).to_string(),
        });
    }

    (cases, skipped)
}

/// Run every case through `infer_categorical`. Cases are scored in parallel;
/// outcomes keep case order.
pub fn run_cases(engine: &InferenceEngine, cases: &[TestCase]) -> Vec<CaseOutcome> {
    cases
        .par_iter()
        .map(|case| {
            let result = engine.infer_categorical(
                case.inputs.iter().map(|(v, t)| (v.as_str(), t.as_str())),
            );
            CaseOutcome {
                line: case.line,
                expected: case.expected.clone(),
                predicted: result.category,
                score: result.score,
                path: result.path,
            }
        })
        .collect()
}

/// Metrics for already-parsed cases.
pub fn evaluate_cases(
    engine: &InferenceEngine,
    cases: &[TestCase],
    rows_skipped: usize,
) -> EvaluationReport {
    let outcomes = run_cases(engine, cases);

    let mut confusion = ConfusionMatrix::new();
    let mut unknown_labels = 0;
    for outcome in &outcomes {
        match RiskCategory::from_label(&outcome.expected) {
            Some(expected) => confusion.record(expected, outcome.predicted),
            None => {
                tracing::debug!(line = outcome.line, label = %outcome.expected, "unknown expected label");
                unknown_labels += 1;
            }
        }
    }

    let report = ClassificationReport::from_confusion(&confusion);
    EvaluationReport {
        rule_count: engine.rule_count(),
        rows_evaluated: outcomes.len(),
        rows_skipped,
        unknown_labels,
        accuracy: confusion.accuracy(),
        report,
        confusion,
        outcomes,
    }
}

/// Evaluate the test file at `path`.
pub fn evaluate_file(
    engine: &InferenceEngine,
    path: &Path,
    corrections: &TermCorrections,
) -> Result<EvaluationReport, EvalError> {
    let _span = cardiorisk_core::evaluate_span!(path.display()).entered();

    let records = read_delimited(path).map_err(|source| EvalError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let (cases, skipped) = parse_cases(records, corrections);
    if cases.is_empty() {
        return Err(EvalError::EmptyTestSet {
            path: path.display().to_string(),
        });
    }

    let report = evaluate_cases(engine, &cases, skipped);
    tracing::info!(
        rows = report.rows_evaluated,
        skipped = report.rows_skipped,
        unknown_labels = report.unknown_labels,
        accuracy = report.accuracy,
        "evaluation complete"
    );
    Ok(report)
}
