//! Classification metrics over the four risk categories.

use cardiorisk_core::RiskCategory;
use serde::Serialize;

const N: usize = RiskCategory::ALL.len();

/// Counts indexed `[expected][predicted]` in [`RiskCategory::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    counts: [[usize; N]; N],
}

impl ConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, expected: RiskCategory, predicted: RiskCategory) {
        self.counts[expected.index()][predicted.index()] += 1;
    }

    pub fn count(&self, expected: RiskCategory, predicted: RiskCategory) -> usize {
        self.counts[expected.index()][predicted.index()]
    }

    pub fn rows(&self) -> &[[usize; N]; N] {
        &self.counts
    }

    /// Rows whose expected label is `category`.
    pub fn support(&self, category: RiskCategory) -> usize {
        self.counts[category.index()].iter().sum()
    }

    /// Rows predicted as `category`.
    pub fn predicted(&self, category: RiskCategory) -> usize {
        self.counts.iter().map(|row| row[category.index()]).sum()
    }

    pub fn correct(&self) -> usize {
        (0..N).map(|i| self.counts[i][i]).sum()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Trace over total; 0 for an empty matrix.
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct(), self.total())
    }
}

impl FromIterator<(RiskCategory, RiskCategory)> for ConfusionMatrix {
    fn from_iter<T: IntoIterator<Item = (RiskCategory, RiskCategory)>>(iter: T) -> Self {
        let mut matrix = Self::new();
        for (expected, predicted) in iter {
            matrix.record(expected, predicted);
        }
        matrix
    }
}

/// Precision, recall and F1 for one class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassMetrics {
    pub category: RiskCategory,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// An averaged row of the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AverageMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Per-class and averaged metrics derived from a confusion matrix.
///
/// Only classes that occur as an expected or predicted label take part;
/// undefined ratios count as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReport {
    pub classes: Vec<ClassMetrics>,
    pub accuracy: f64,
    pub macro_avg: AverageMetrics,
    pub weighted_avg: AverageMetrics,
}

impl ClassificationReport {
    pub fn from_confusion(matrix: &ConfusionMatrix) -> Self {
        let classes: Vec<ClassMetrics> = RiskCategory::ALL
            .into_iter()
            .filter(|&c| matrix.support(c) > 0 || matrix.predicted(c) > 0)
            .map(|category| {
                let tp = matrix.count(category, category);
                let precision = ratio(tp, matrix.predicted(category));
                let recall = ratio(tp, matrix.support(category));
                ClassMetrics {
                    category,
                    precision,
                    recall,
                    f1: f1(precision, recall),
                    support: matrix.support(category),
                }
            })
            .collect();

        let total = matrix.total();
        let n = classes.len() as f64;
        let mean = |f: fn(&ClassMetrics) -> f64| {
            if classes.is_empty() {
                0.0
            } else {
                classes.iter().map(f).sum::<f64>() / n
            }
        };
        let weighted = |f: fn(&ClassMetrics) -> f64| {
            if total == 0 {
                0.0
            } else {
                classes.iter().map(|c| f(c) * c.support as f64).sum::<f64>() / total as f64
            }
        };

        let macro_avg = AverageMetrics {
            precision: mean(|c| c.precision),
            recall: mean(|c| c.recall),
            f1: mean(|c| c.f1),
            support: total,
        };
        let weighted_avg = AverageMetrics {
            precision: weighted(|c| c.precision),
            recall: weighted(|c| c.recall),
            f1: weighted(|c| c.f1),
            support: total,
        };

        Self {
            classes,
            accuracy: matrix.accuracy(),
            macro_avg,
            weighted_avg,
        }
    }

    pub fn class(&self, category: RiskCategory) -> Option<&ClassMetrics> {
        self.classes.iter().find(|c| c.category == category)
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

fn f1(precision: f64, recall: f64) -> f64 {
    let sum = precision + recall;
    if sum == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RiskCategory::*;

    fn sample() -> ConfusionMatrix {
        [
            (Healthy, Healthy),
            (Healthy, Healthy),
            (Healthy, LowRisk),
            (LowRisk, LowRisk),
            (MediumRisk, HighRisk),
            (HighRisk, HighRisk),
            (HighRisk, HighRisk),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn rows_sum_to_support() {
        let m = sample();
        let supports: Vec<usize> = RiskCategory::ALL.iter().map(|&c| m.support(c)).collect();
        assert_eq!(supports, [3, 1, 1, 2]);
        for (i, row) in m.rows().iter().enumerate() {
            assert_eq!(row.iter().sum::<usize>(), supports[i]);
        }
    }

    #[test]
    fn accuracy_is_trace_over_total() {
        let m = sample();
        assert_eq!(m.correct(), 5);
        assert_eq!(m.total(), 7);
        assert!((m.accuracy() - 5.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn per_class_metrics() {
        let report = ClassificationReport::from_confusion(&sample());
        let healthy = report.class(Healthy).unwrap();
        assert_eq!(healthy.precision, 1.0);
        assert!((healthy.recall - 2.0 / 3.0).abs() < 1e-12);
        assert!((healthy.f1 - 0.8).abs() < 1e-12);

        let medium = report.class(MediumRisk).unwrap();
        assert_eq!((medium.precision, medium.recall, medium.f1), (0.0, 0.0, 0.0));

        let high = report.class(HighRisk).unwrap();
        assert!((high.precision - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(high.recall, 1.0);
    }

    #[test]
    fn absent_classes_are_excluded_from_macro_average() {
        let m: ConfusionMatrix = [(Healthy, Healthy), (HighRisk, HighRisk)].into_iter().collect();
        let report = ClassificationReport::from_confusion(&m);
        assert_eq!(report.classes.len(), 2);
        assert_eq!(report.macro_avg.f1, 1.0);
        assert_eq!(report.weighted_avg.recall, 1.0);
    }

    #[test]
    fn empty_matrix_reports_zeros() {
        let report = ClassificationReport::from_confusion(&ConfusionMatrix::new());
        assert!(report.classes.is_empty());
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.macro_avg.f1, 0.0);
        assert_eq!(report.weighted_avg.support, 0);
    }
}
