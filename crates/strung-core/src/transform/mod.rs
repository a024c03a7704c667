//! Rigid transforms for sets of string positions: rotation and displacement.
//!
//! # Transform Order
//!
//! A baseline set of strings is built around the origin (see
//! [`crate::symmetry`]) and then moved into place:
//! 1. Rotation about (0, 0)
//! 2. Displacement
//!
//! Displacing first and rotating afterwards would rotate the strings around
//! the wrong center. [`apply_transformations`] and [`Placement`] always use
//! the order above; callers combining [`apply_rotation`] and
//! [`apply_displacement`] by hand must do the same.
//!
//! # Coordinate System
//!
//! - Point sets are `(N, 2)` arrays, one `(x, y)` row per string
//! - Angles are in radians, positive = counter-clockwise
//! - Every operation returns a new array; inputs are never modified

mod compose;
mod displacement;
mod placement;
mod rotation;

pub use compose::apply_transformations;
pub use displacement::apply_displacement;
pub use placement::Placement;
pub use rotation::{apply_rotation, rotation_matrix};

use ndarray::{ArrayBase, Data, Ix2};

use crate::error::ShapeMismatch;

/// Check that `points` holds `(x, y)` rows.
pub(crate) fn check_points<S>(points: &ArrayBase<S, Ix2>) -> Result<(), ShapeMismatch>
where
    S: Data<Elem = f64>,
{
    if points.ncols() != 2 {
        return Err(ShapeMismatch::points(points.shape()));
    }
    Ok(())
}
