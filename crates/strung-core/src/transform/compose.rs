use ndarray::{Array2, ArrayBase, Data, Dimension, Ix2};

use super::{apply_displacement, apply_rotation, check_points};
use crate::error::ShapeMismatch;

/// Rotate a baseline set of strings centered around (0, 0), then displace it.
///
/// Equivalent to `apply_displacement(&apply_rotation(points, angle)?, displacement)`.
///
/// # Arguments
///
/// * `points` - Set of N string positions centered around (0, 0), shape `(N, 2)`
/// * `displacement` - Displacement of the set with respect to the origin, shape `(2,)`
/// * `angle` - Rotation angle with respect to the x axis, radians, counter-clockwise
///
/// # Errors
///
/// Shape errors from either step are returned unchanged.
pub fn apply_transformations<S, T, D>(
    points: &ArrayBase<S, Ix2>,
    displacement: &ArrayBase<T, D>,
    angle: f64,
) -> Result<Array2<f64>, ShapeMismatch>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    check_points(points)?;
    let rotated = apply_rotation(points, angle)?;
    apply_displacement(&rotated, displacement)
}
