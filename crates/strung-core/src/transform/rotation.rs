//! Rotation of string positions about the origin.
//!
//! Each point is treated as a column vector and multiplied by the standard
//! counter-clockwise rotation matrix:
//! ```text
//! [ cos(a)  -sin(a) ]
//! [ sin(a)   cos(a) ]
//! ```
//! For a whole `(N, 2)` set this is `(R · Pᵗ)ᵗ`, evaluated as `P · Rᵗ`.

use ndarray::{array, Array2, ArrayBase, Data, Ix2};

use super::check_points;
use crate::error::ShapeMismatch;

/// The 2x2 counter-clockwise rotation matrix for `angle` radians.
pub fn rotation_matrix(angle: f64) -> Array2<f64> {
    let (sin, cos) = angle.sin_cos();
    array![[cos, -sin], [sin, cos]]
}

/// Rotate a set of string positions around (0, 0).
///
/// # Arguments
///
/// * `points` - Set of N string positions, shape `(N, 2)`
/// * `angle` - Rotation angle in radians (positive = counter-clockwise)
///
/// # Returns
///
/// Rotated positions, shape `(N, 2)`. An empty set stays empty.
///
/// # Errors
///
/// [`ShapeMismatch::Points`] if the trailing dimension of `points` is not 2.
///
/// # Example
///
/// ```ignore
/// use ndarray::array;
/// use strung_core::apply_rotation;
///
/// let rotated = apply_rotation(&array![[1.0, 0.0]], std::f64::consts::FRAC_PI_2)?;
/// // rotated ≈ [[0.0, 1.0]]
/// ```
pub fn apply_rotation<S>(
    points: &ArrayBase<S, Ix2>,
    angle: f64,
) -> Result<Array2<f64>, ShapeMismatch>
where
    S: Data<Elem = f64>,
{
    check_points(points)?;
    log::trace!("rotating {} strings by {:.4} rad", points.nrows(), angle);

    Ok(points.dot(&rotation_matrix(angle).t()))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
