//! Triangular membership curve.

use cardiorisk_core::errors::ModelError;

use super::Universe;

/// Piecewise-linear curve: 0 at `a`, 1 at `b`, 0 at `c`, with `a <= b <= c`.
/// `a == b` gives a left-shouldered triangle, `b == c` a right-shouldered one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularMf {
    a: f64,
    b: f64,
    c: f64,
}

impl TriangularMf {
    /// Validate the parameter triple for `variable.term`.
    pub fn new(variable: &str, term: &str, [a, b, c]: [f64; 3]) -> Result<Self, ModelError> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(ModelError::NonFiniteParameters {
                variable: variable.to_string(),
                term: term.to_string(),
            });
        }
        if !(a <= b && b <= c) {
            return Err(ModelError::NonIncreasingParameters {
                variable: variable.to_string(),
                term: term.to_string(),
                a,
                b,
                c,
            });
        }
        Ok(Self { a, b, c })
    }

    pub fn params(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// The point of full membership.
    pub fn peak(&self) -> f64 {
        self.b
    }

    /// Membership of `x` in [0, 1].
    pub fn evaluate(&self, x: f64) -> f64 {
        let Self { a, b, c } = *self;
        if x == b {
            1.0
        } else if a < x && x < b {
            (x - a) / (b - a)
        } else if b < x && x < c {
            (c - x) / (c - b)
        } else {
            0.0
        }
    }

    /// Sample the curve at every point of `universe`.
    pub fn sample(&self, universe: &Universe) -> Vec<f64> {
        universe.samples().iter().map(|&x| self.evaluate(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mf(a: f64, b: f64, c: f64) -> TriangularMf {
        TriangularMf::new("v", "t", [a, b, c]).unwrap()
    }

    #[test]
    fn regular_triangle() {
        let m = mf(4.0, 6.0, 8.0);
        assert_eq!(m.evaluate(4.0), 0.0);
        assert_eq!(m.evaluate(5.0), 0.5);
        assert_eq!(m.evaluate(6.0), 1.0);
        assert_eq!(m.evaluate(7.5), 0.25);
        assert_eq!(m.evaluate(8.0), 0.0);
        assert_eq!(m.evaluate(100.0), 0.0);
    }

    #[test]
    fn shouldered_triangles() {
        let left = mf(0.0, 0.0, 0.5);
        assert_eq!(left.evaluate(0.0), 1.0);
        assert_eq!(left.evaluate(0.25), 0.5);
        assert_eq!(left.evaluate(-1.0), 0.0);

        let right = mf(6.0, 10.0, 10.0);
        assert_eq!(right.evaluate(10.0), 1.0);
        assert_eq!(right.evaluate(8.0), 0.5);
    }

    #[test]
    fn rejects_decreasing_and_non_finite() {
        assert!(matches!(
            TriangularMf::new("Age", "Old", [60.0, 50.0, 85.0]),
            Err(ModelError::NonIncreasingParameters { .. })
        ));
        assert!(matches!(
            TriangularMf::new("Age", "Old", [60.0, f64::NAN, 85.0]),
            Err(ModelError::NonFiniteParameters { .. })
        ));
    }
}
