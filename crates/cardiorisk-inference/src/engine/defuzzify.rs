//! Hybrid defuzzification: centroid, bisector, and mean-of-maximum,
//! averaged over whichever of them are defined.

use serde::Serialize;

use crate::membership::Universe;

/// Result of one estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Estimate {
    Defined(f64),
    Undefined,
}

impl Estimate {
    fn from_value(v: f64) -> Self {
        if v.is_finite() {
            Self::Defined(v)
        } else {
            Self::Undefined
        }
    }

    pub fn value(&self) -> Option<f64> {
        match *self {
            Self::Defined(v) => Some(v),
            Self::Undefined => None,
        }
    }
}

/// Each estimator plus the combined score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DefuzzBreakdown {
    pub centroid: Estimate,
    pub bisector: Estimate,
    pub mean_of_maximum: Estimate,
    pub score: f64,
}

/// Weighted mean position `Σ x·μ / Σ μ`.
pub fn centroid(universe: &Universe, mu: &[f64]) -> Estimate {
    let (num, den) = universe
        .samples()
        .iter()
        .zip(mu)
        .fold((0.0, 0.0), |(n, d), (&x, &m)| (n + x * m, d + m));
    if den <= 0.0 {
        return Estimate::Undefined;
    }
    Estimate::from_value(num / den)
}

/// Position splitting the trapezoidal area under `mu` into equal halves.
pub fn bisector(universe: &Universe, mu: &[f64]) -> Estimate {
    let xs = universe.samples();
    let areas: Vec<f64> = xs
        .windows(2)
        .zip(mu.windows(2))
        .map(|(x, m)| (m[0] + m[1]) * 0.5 * (x[1] - x[0]))
        .collect();
    let total: f64 = areas.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return Estimate::Undefined;
    }

    let half = total / 2.0;
    let mut cumulative = 0.0;
    for (i, &area) in areas.iter().enumerate() {
        if cumulative + area >= half {
            let dx = xs[i + 1] - xs[i];
            let t = segment_fraction(mu[i], mu[i + 1], (half - cumulative) / dx);
            return Estimate::from_value(xs[i] + t * dx);
        }
        cumulative += area;
    }
    Estimate::from_value(xs[xs.len() - 1])
}

/// Fraction `t` of a unit-width trapezoid (heights `m0`, `m1`) whose
/// leftmost area equals `target`: solves `m0·t + (m1 - m0)·t²/2 = target`.
fn segment_fraction(m0: f64, m1: f64, target: f64) -> f64 {
    let slope = m1 - m0;
    let t = if slope.abs() < 1e-12 {
        if m0 <= 0.0 {
            0.0
        } else {
            target / m0
        }
    } else {
        (-m0 + (m0 * m0 + 2.0 * slope * target).max(0.0).sqrt()) / slope
    };
    t.clamp(0.0, 1.0)
}

/// Mean of the positions attaining the maximum membership.
pub fn mean_of_maximum(universe: &Universe, mu: &[f64]) -> Estimate {
    let max = mu.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return Estimate::Undefined;
    }
    let (sum, count) = universe
        .samples()
        .iter()
        .zip(mu)
        .filter(|&(_, &m)| m == max)
        .fold((0.0, 0usize), |(s, c), (&x, _)| (s + x, c + 1));
    if count == 0 {
        return Estimate::Undefined;
    }
    Estimate::from_value(sum / count as f64)
}

/// Run all three estimators and average the defined ones. An all-zero
/// distribution, or one where every estimator is undefined, yields `neutral`.
pub fn hybrid(universe: &Universe, mu: &[f64], neutral: f64) -> DefuzzBreakdown {
    let total: f64 = mu.iter().sum();
    if total == 0.0 {
        return DefuzzBreakdown {
            centroid: Estimate::Undefined,
            bisector: Estimate::Undefined,
            mean_of_maximum: Estimate::Undefined,
            score: neutral,
        };
    }

    let centroid = centroid(universe, mu);
    let bisector = bisector(universe, mu);
    let mean_of_maximum = mean_of_maximum(universe, mu);

    let defined: Vec<f64> = [centroid, bisector, mean_of_maximum]
        .iter()
        .filter_map(Estimate::value)
        .collect();
    let score = if defined.is_empty() {
        neutral
    } else {
        defined.iter().sum::<f64>() / defined.len() as f64
    };

    DefuzzBreakdown {
        centroid,
        bisector,
        mean_of_maximum,
        score,
    }
}
