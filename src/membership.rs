use crate::error::ConfigError;
use crate::universe::Universe;

/// A membership function mapping any crisp value to a degree in `[0, 1]`.
///
/// Shapes are a closed set dispatched by variant. Out-of-range inputs are
/// valid: the value is clamped into the shape's support, so a sloped edge
/// yields 0 beyond it and a shoulder edge yields 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MembershipFunction {
    shape: Shape,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Shape {
    Triangle { a: f64, b: f64, c: f64 },
    Trapezoid { a: f64, b: f64, c: f64, d: f64 },
}

impl MembershipFunction {
    /// Piecewise-linear triangle rising on `[a, b]` and falling on `[b, c]`.
    /// `a == b` or `b == c` degenerate into a left or right shoulder.
    pub fn triangle(a: f64, b: f64, c: f64) -> Result<Self, ConfigError> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) || !(a <= b && b <= c) {
            return Err(ConfigError::InvalidMembership(format!(
                "triangle parameters must be finite with a <= b <= c, got ({a}, {b}, {c})"
            )));
        }

        Ok(Self {
            shape: Shape::Triangle { a, b, c },
        })
    }

    /// Piecewise-linear trapezoid, flat at 1 on `[b, c]`.
    pub fn trapezoid(a: f64, b: f64, c: f64, d: f64) -> Result<Self, ConfigError> {
        if !(a.is_finite() && b.is_finite() && c.is_finite() && d.is_finite())
            || !(a <= b && b <= c && c <= d)
        {
            return Err(ConfigError::InvalidMembership(format!(
                "trapezoid parameters must be finite with a <= b <= c <= d, got ({a}, {b}, {c}, {d})"
            )));
        }

        Ok(Self {
            shape: Shape::Trapezoid { a, b, c, d },
        })
    }

    /// Membership degree of `x`. Pure; defined for every real `x`.
    pub fn degree(&self, x: f64) -> f64 {
        match self.shape {
            Shape::Triangle { a, b, c } => {
                // Clamping first makes the divisions safe: x < b implies
                // b > a, and x > b implies c > b.
                let x = x.clamp(a, c);

                if x < b {
                    (x - a) / (b - a)
                } else if x > b {
                    (c - x) / (c - b)
                } else {
                    1.
                }
            },
            Shape::Trapezoid { a, b, c, d } => {
                let x = x.clamp(a, d);

                if x < b {
                    (x - a) / (b - a)
                } else if x > c {
                    (d - x) / (d - c)
                } else {
                    1.
                }
            },
        }
    }

    /// Degree at every sample point of `universe`, aligned with its points.
    pub fn evaluate_over(&self, universe: &Universe) -> Vec<f64> {
        universe.points().iter().map(|&x| self.degree(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn triangle_vertices() {
        let mf = MembershipFunction::triangle(2., 5., 8.).unwrap();

        assert_eq!(mf.degree(2.), 0.);
        assert_eq!(mf.degree(5.), 1.);
        assert_eq!(mf.degree(8.), 0.);
        assert_eq!(mf.degree(3.5), 0.5);
        assert_eq!(mf.degree(6.5), 0.5);
    }

    #[test]
    fn triangle_out_of_range_is_clamped() {
        let mf = MembershipFunction::triangle(2., 5., 8.).unwrap();

        assert_eq!(mf.degree(-100.), 0.);
        assert_eq!(mf.degree(100.), 0.);
    }

    #[test]
    fn degenerate_triangle_is_a_shoulder() {
        // Left shoulder: full membership at and below the flat edge.
        let left = MembershipFunction::triangle(0., 0., 4.).unwrap();

        assert_eq!(left.degree(0.), 1.);
        assert_eq!(left.degree(-1.), 1.);
        assert_eq!(left.degree(2.), 0.5);
        assert_eq!(left.degree(4.), 0.);

        let right = MembershipFunction::triangle(6., 10., 10.).unwrap();

        assert_eq!(right.degree(6.), 0.);
        assert_eq!(right.degree(10.), 1.);
        assert_eq!(right.degree(11.), 1.);
    }

    #[test]
    fn trapezoid_plateau() {
        let mf = MembershipFunction::trapezoid(0., 2., 6., 8.).unwrap();

        assert_eq!(mf.degree(1.), 0.5);
        assert_eq!(mf.degree(2.), 1.);
        assert_eq!(mf.degree(4.), 1.);
        assert_eq!(mf.degree(6.), 1.);
        assert_eq!(mf.degree(7.), 0.5);
    }

    #[test]
    fn misordered_parameters_are_rejected() {
        assert!(MembershipFunction::triangle(5., 2., 8.).is_err());
        assert!(MembershipFunction::triangle(0., 4., 2.).is_err());
        assert!(MembershipFunction::triangle(0., f64::NAN, 2.).is_err());
        assert!(MembershipFunction::trapezoid(0., 3., 2., 8.).is_err());
    }

    #[test]
    fn evaluate_over_aligns_with_universe() {
        let mf = MembershipFunction::triangle(0., 2., 4.).unwrap();
        let u = Universe::with_step(0.0..=4.0, 1.0).unwrap();

        assert_eq!(mf.evaluate_over(&u), vec![0., 0.5, 1., 0.5, 0.]);
    }

    proptest! {
        #[test]
        fn degree_stays_in_unit_interval(
            a in -50.0f64..50.0,
            rise in 0.0f64..25.0,
            fall in 0.0f64..25.0,
            x in -200.0f64..200.0,
        ) {
            let mf = MembershipFunction::triangle(a, a + rise, a + rise + fall).unwrap();
            let d = mf.degree(x);

            prop_assert!((0.0..=1.0).contains(&d));
        }

        #[test]
        fn degree_peaks_at_b(
            a in -50.0f64..50.0,
            rise in 0.0f64..25.0,
            fall in 0.0f64..25.0,
        ) {
            let b = a + rise;
            let mf = MembershipFunction::triangle(a, b, b + fall).unwrap();

            prop_assert_eq!(mf.degree(b), 1.0);
        }

        #[test]
        fn degree_is_monotone_on_the_rising_edge(
            a in -50.0f64..50.0,
            rise in 0.01f64..25.0,
            fall in 0.0f64..25.0,
            t1 in 0.0f64..1.0,
            t2 in 0.0f64..1.0,
        ) {
            let b = a + rise;
            let mf = MembershipFunction::triangle(a, b, b + fall).unwrap();
            let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };

            prop_assert!(mf.degree(a + lo * rise) <= mf.degree(a + hi * rise));
        }

        #[test]
        fn degree_is_monotone_on_the_falling_edge(
            a in -50.0f64..50.0,
            rise in 0.0f64..25.0,
            fall in 0.01f64..25.0,
            t1 in 0.0f64..1.0,
            t2 in 0.0f64..1.0,
        ) {
            let b = a + rise;
            let mf = MembershipFunction::triangle(a, b, b + fall).unwrap();
            let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };

            prop_assert!(mf.degree(b + lo * fall) >= mf.degree(b + hi * fall));
        }
    }
}
