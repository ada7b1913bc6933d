//! Plain-text rendering of an [`EvaluationReport`] and of single inference
//! results.

use std::fmt::{self, Write};

use cardiorisk_core::RiskCategory;
use cardiorisk_inference::definitions::input_spec;
use cardiorisk_inference::InferenceResult;

use crate::harness::EvaluationReport;
use crate::metrics::{AverageMetrics, ClassificationReport, ConfusionMatrix};

const RULE: &str = "============================================================";

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rules loaded: {}", self.rule_count)?;
        write!(f, "Test rows: {}", self.rows_evaluated)?;
        if self.rows_skipped > 0 || self.unknown_labels > 0 {
            write!(
                f,
                " (skipped {}, unknown labels {})",
                self.rows_skipped, self.unknown_labels
            )?;
        }
        writeln!(f)?;
        writeln!(f)?;
        write!(f, "Accuracy: {:.2}%", self.accuracy * 100.0)?;
        if self.unknown_labels > 0 {
            write!(f, " (unknown labels excluded: {})", self.unknown_labels)?;
        }
        writeln!(f)?;
        writeln!(f)?;
        f.write_str(&render_classification(&self.report))?;
        writeln!(f)?;
        f.write_str(&render_confusion(&self.confusion))
    }
}

/// Console banner around a section title.
pub fn banner(title: &str) -> String {
    format!("{RULE}\n{title}\n{RULE}")
}

/// Score, category, the dominant term of every fuzzified input and the rules
/// that fired.
pub fn render_inference(result: &InferenceResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Risk score: {:.2}", result.score);
    let _ = writeln!(
        out,
        "Category:   {} ({})",
        result.category,
        result.category.description()
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Fuzzification:");
    for (name, memberships) in result.fuzzified.iter() {
        let Some((term, degree)) = memberships.dominant() else {
            continue;
        };
        let display = input_spec(name)
            .map(|spec| spec.display_name())
            .unwrap_or_else(|| name.to_string());
        let _ = writeln!(out, "  {display:<30} \u{2192} {term:<12} (\u{3bc} = {degree:.2})");
    }

    let _ = writeln!(out);
    if result.is_fallback() {
        let _ = writeln!(out, "No rule fired; weighted fallback used.");
    } else {
        let _ = writeln!(out, "Fired rules: {}", result.activations.len());
        for activation in &result.activations {
            let _ = writeln!(
                out,
                "  #{:<4} {:<10} {:.3}",
                activation.rule_index, activation.consequent, activation.degree
            );
        }
    }
    out
}

/// The per-class table followed by accuracy and averages.
pub fn render_classification(report: &ClassificationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>12} {:>10} {:>10} {:>10} {:>10}",
        "", "precision", "recall", "f1-score", "support"
    );
    let _ = writeln!(out);
    for class in &report.classes {
        let _ = writeln!(
            out,
            "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}",
            class.category.as_str(),
            class.precision,
            class.recall,
            class.f1,
            class.support
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:>12} {:>10} {:>10} {:>10.2} {:>10}",
        "accuracy", "", "", report.accuracy, report.macro_avg.support
    );
    average_row(&mut out, "macro avg", &report.macro_avg);
    average_row(&mut out, "weighted avg", &report.weighted_avg);
    out
}

fn average_row(out: &mut String, label: &str, avg: &AverageMetrics) {
    let _ = writeln!(
        out,
        "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}",
        label, avg.precision, avg.recall, avg.f1, avg.support
    );
}

/// Confusion matrix with expected labels as rows.
pub fn render_confusion(matrix: &ConfusionMatrix) -> String {
    let mut out = String::from("Confusion matrix:\n");
    let _ = write!(out, "{:12}", "");
    for category in RiskCategory::ALL {
        let _ = write!(out, " {:>10}", category.as_str());
    }
    let _ = writeln!(out);
    for expected in RiskCategory::ALL {
        let _ = write!(out, "{:12}", expected.as_str());
        for predicted in RiskCategory::ALL {
            let _ = write!(out, " {:>10}", matrix.count(expected, predicted));
        }
        let _ = writeln!(out);
    }
    out
}
