//! Displacement of string positions.

use ndarray::{aview1, Array2, ArrayBase, Data, Dimension, Ix2};

use super::check_points;
use crate::error::ShapeMismatch;

/// Apply a displacement to a set of string positions.
///
/// Note that the displacement must be applied only *after* the rotation,
/// otherwise the strings end up rotated around the wrong center.
///
/// # Arguments
///
/// * `points` - Set of N string positions, shape `(N, 2)`
/// * `displacement` - Offset `(dx, dy)`, shape `(2,)`
///
/// # Errors
///
/// - [`ShapeMismatch::Points`] if the trailing dimension of `points` is not 2
/// - [`ShapeMismatch::Displacement`] if `displacement` is not shaped `(2,)`
pub fn apply_displacement<S, T, D>(
    points: &ArrayBase<S, Ix2>,
    displacement: &ArrayBase<T, D>,
) -> Result<Array2<f64>, ShapeMismatch>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    check_points(points)?;
    let offset = displacement_vector(displacement)?;
    log::trace!(
        "displacing {} strings by ({:.4}, {:.4})",
        points.nrows(),
        offset[0],
        offset[1]
    );

    let mut displaced = points.to_owned();
    displaced += &aview1(&offset);
    Ok(displaced)
}

/// Extract `(dx, dy)` from an array that must be shaped exactly `(2,)`.
fn displacement_vector<T, D>(
    displacement: &ArrayBase<T, D>,
) -> Result<[f64; 2], ShapeMismatch>
where
    T: Data<Elem = f64>,
    D: Dimension,
{
    let mut values = displacement.iter().copied();
    match (displacement.shape(), values.next(), values.next()) {
        ([2], Some(dx), Some(dy)) => Ok([dx, dy]),
        (shape, _, _) => Err(ShapeMismatch::displacement(shape)),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use ndarray::{array, Array2};
    use proptest::prelude::*;

    fn points_strategy() -> impl Strategy<Value = Array2<f64>> {
        prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..32).prop_map(|pts| {
            let n = pts.len();
            let flat: Vec<f64> = pts.into_iter().flat_map(|(x, y)| [x, y]).collect();
            Array2::from_shape_vec((n, 2), flat).unwrap()
        })
    }

    fn offset_strategy() -> impl Strategy<Value = (f64, f64)> {
        (-100.0f64..100.0, -100.0f64..100.0)
    }

    proptest! {
        /// Property: Two displacements equal one displacement by their sum.
        #[test]
        fn prop_displacement_is_additive(
            points in points_strategy(),
            (x1, y1) in offset_strategy(),
            (x2, y2) in offset_strategy(),
        ) {
            let twice = apply_displacement(
                &apply_displacement(&points, &array![x1, y1]).unwrap(),
                &array![x2, y2],
            )
            .unwrap();
            let once = apply_displacement(&points, &array![x1 + x2, y1 + y2]).unwrap();

            for (a, b) in twice.iter().zip(once.iter()) {
                prop_assert!((a - b).abs() < 1e-9, "expected {}, got {}", b, a);
            }
        }

        /// Property: Every point moves by exactly the displacement.
        #[test]
        fn prop_every_point_moves_by_offset(
            points in points_strategy(),
            (dx, dy) in offset_strategy(),
        ) {
            let moved = apply_displacement(&points, &array![dx, dy]).unwrap();

            prop_assert_eq!(moved.shape(), points.shape());
            for (before, after) in points.rows().into_iter().zip(moved.rows()) {
                prop_assert_eq!(after[0], before[0] + dx);
                prop_assert_eq!(after[1], before[1] + dy);
            }
        }
    }
}
