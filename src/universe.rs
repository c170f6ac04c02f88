use std::ops::RangeInclusive;

use crate::error::ConfigError;

/// An ordered discretization of a variable's domain.
///
/// Every term attached to a variable is sampled over the same universe,
/// and defuzzification is a weighted average of its points.
#[derive(Clone, Debug, PartialEq)]
pub struct Universe {
    points: Vec<f64>,
}

impl Universe {
    /// Evenly spaced samples of `range`, roughly `step` apart, with both
    /// endpoints included. The count follows `floor((max - min) / step) + 1`,
    /// so a step that does not divide the range evenly is stretched to
    /// land exactly on the upper bound.
    pub fn with_step(range: RangeInclusive<f64>, step: f64) -> Result<Self, ConfigError> {
        let min = *range.start();
        let max = *range.end();

        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(ConfigError::InvalidUniverse(format!(
                "bounds must be finite with max > min, got [{min}, {max}]"
            )));
        }
        if !step.is_finite() || step <= 0. {
            return Err(ConfigError::InvalidUniverse(format!(
                "step must be positive and finite, got {step}"
            )));
        }

        let n = ((max - min) / step).floor() as usize + 1;

        Ok(Self {
            points: Linspace::new(min, max, n.max(2)).collect(),
        })
    }

    /// Arbitrary sample points. Must be strictly increasing with at least
    /// two entries.
    pub fn from_points(points: Vec<f64>) -> Result<Self, ConfigError> {
        if points.len() < 2 {
            return Err(ConfigError::InvalidUniverse(format!(
                "need at least two points, got {}",
                points.len()
            )));
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(ConfigError::InvalidUniverse("points must be finite".into()));
        }
        if points.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::InvalidUniverse(
                "points must be strictly increasing".into(),
            ));
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Lower bound of the domain.
    pub fn min(&self) -> f64 {
        self.points[0]
    }

    /// Upper bound of the domain.
    pub fn max(&self) -> f64 {
        self.points[self.points.len() - 1]
    }
}

/// Evenly spaced values between two endpoints, both included.
struct Linspace {
    start: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Linspace {
    fn new(min: f64, max: f64, n: usize) -> Self {
        let step = if n > 1 {
            (max - min) / (n - 1) as f64
        } else {
            0.
        };

        Linspace {
            start: min,
            step,
            index: 0,
            len: n,
        }
    }
}

impl Iterator for Linspace {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            None
        } else {
            let i = self.index;
            self.index += 1;
            Some(self.start + self.step * i as f64)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}
