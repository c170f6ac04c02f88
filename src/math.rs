use std::iter::Sum;

use num::Float;

/// Center of mass of `degrees` over `points`, or `None` when the total
/// mass is zero and the centroid is undefined.
pub(crate) fn centroid<F>(points: &[F], degrees: &[F]) -> Option<F>
where
    F: Float + Sum,
{
    debug_assert_eq!(points.len(), degrees.len());

    let mass: F = degrees.iter().copied().sum();

    if mass == F::zero() {
        return None;
    }

    let moment: F = points
        .iter()
        .copied()
        .zip(degrees.iter().copied())
        .map(|(x, d)| x * d)
        .sum();

    Some(moment / mass)
}

#[test]
fn test_centroid() {
    let points = [0., 1., 2., 3., 4.];
    let degrees = [0., 0.5, 1., 0.5, 0.];

    assert_eq!(centroid(&points, &degrees), Some(2.));

    let zeros = [0.; 5];

    assert_eq!(centroid(&points, &zeros), None);
}

#[test]
fn test_centroid_asymmetric() {
    let points = [0., 1., 2., 3.];
    let degrees = [0., 0., 1., 1.];

    assert_eq!(centroid(&points, &degrees), Some(2.5));
}
