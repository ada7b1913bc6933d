//! Discretized domain shared by all membership curves of one variable.

use cardiorisk_core::errors::ModelError;

/// Strictly increasing, non-empty sampling of `[start, end]` at a fixed step.
///
/// Sample `i` is `start + i * step`; the count is `round((end - start) / step) + 1`,
/// so `end` is included when it lies on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Universe {
    samples: Vec<f64>,
    step: f64,
}

impl Universe {
    /// Build the sampling for the variable named `owner`.
    pub fn new(owner: &str, start: f64, end: f64, step: f64) -> Result<Self, ModelError> {
        let invalid = |reason: &str| ModelError::InvalidUniverse {
            variable: owner.to_string(),
            reason: reason.to_string(),
        };

        if !start.is_finite() || !end.is_finite() || !step.is_finite() {
            return Err(invalid("bounds and step must be finite"));
        }
        if step <= 0.0 {
            return Err(invalid("step must be positive"));
        }
        if end < start {
            return Err(invalid("end must not precede start"));
        }

        let count = ((end - start) / step).round() as usize + 1;
        let samples = (0..count).map(|i| start + i as f64 * step).collect();
        Ok(Self { samples, step })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; construction guarantees at least one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn start(&self) -> f64 {
        self.samples[0]
    }

    pub fn end(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }

    /// Linear interpolation of `curve` (one value per sample) at `x`.
    ///
    /// Values outside the sampled range take the boundary sample's value;
    /// there is no extrapolation.
    pub fn interpolate(&self, curve: &[f64], x: f64) -> f64 {
        debug_assert_eq!(curve.len(), self.samples.len());
        let xs = &self.samples;
        let last = xs.len() - 1;

        if x <= xs[0] {
            return curve[0];
        }
        if x >= xs[last] {
            return curve[last];
        }

        // First index with xs[i] > x; x lies in [xs[hi - 1], xs[hi]).
        let hi = xs.partition_point(|&s| s <= x);
        let lo = hi - 1;
        let span = xs[hi] - xs[lo];
        let t = (x - xs[lo]) / span;
        curve[lo] + t * (curve[hi] - curve[lo])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_endpoint_and_count() {
        let u = Universe::new("Age", 20.0, 100.0, 1.0).unwrap();
        assert_eq!(u.len(), 81);
        assert_eq!(u.start(), 20.0);
        assert_eq!(u.end(), 100.0);

        let risk = Universe::new("Risk", 0.0, 10.0, 0.01).unwrap();
        assert_eq!(risk.len(), 1001);
        assert!((risk.end() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn strictly_increasing() {
        let u = Universe::new("HbA1c", 4.0, 14.0, 0.1).unwrap();
        assert!(u.samples().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(Universe::new("x", 0.0, 1.0, 0.0).is_err());
        assert!(Universe::new("x", 0.0, 1.0, -0.1).is_err());
        assert!(Universe::new("x", 1.0, 0.0, 0.1).is_err());
        assert!(Universe::new("x", f64::NAN, 1.0, 0.1).is_err());
    }

    #[test]
    fn single_sample_universe() {
        let u = Universe::new("x", 2.0, 2.0, 1.0).unwrap();
        assert_eq!(u.len(), 1);
        assert_eq!(u.interpolate(&[0.7], 5.0), 0.7);
        assert_eq!(u.interpolate(&[0.7], -5.0), 0.7);
    }

    #[test]
    fn interpolation_clamps_at_boundaries() {
        let u = Universe::new("x", 0.0, 2.0, 1.0).unwrap();
        let curve = [0.2, 1.0, 0.4];
        assert_eq!(u.interpolate(&curve, -3.0), 0.2);
        assert_eq!(u.interpolate(&curve, 9.0), 0.4);
        assert!((u.interpolate(&curve, 0.5) - 0.6).abs() < 1e-12);
        assert!((u.interpolate(&curve, 1.5) - 0.7).abs() < 1e-12);
        assert_eq!(u.interpolate(&curve, 1.0), 1.0);
    }
}
