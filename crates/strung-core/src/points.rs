//! Conversion between point sets and interleaved coordinate buffers.
//!
//! Hosts without an n-dimensional array type hand over coordinates as a flat
//! `[x0, y0, x1, y1, ...]` buffer. These helpers move between that layout and
//! the `(N, 2)` arrays the transforms work on.

use ndarray::{Array2, ArrayBase, Data, Ix2};

use crate::error::ShapeMismatch;

/// Build an `(N, 2)` point set from an interleaved buffer of `2 * N` values.
///
/// # Errors
///
/// [`ShapeMismatch::Points`] reporting `(len,)` if the buffer holds an odd
/// number of values.
pub fn points_from_interleaved(data: &[f64]) -> Result<Array2<f64>, ShapeMismatch> {
    if data.len() % 2 != 0 {
        return Err(ShapeMismatch::points(&[data.len()]));
    }
    Array2::from_shape_vec((data.len() / 2, 2), data.to_vec())
        .map_err(|_| ShapeMismatch::points(&[data.len()]))
}

/// Flatten a point set into an interleaved buffer, row by row.
pub fn points_into_interleaved<S>(points: &ArrayBase<S, Ix2>) -> Vec<f64>
where
    S: Data<Elem = f64>,
{
    points.iter().copied().collect()
}
