//! Rotationally symmetric sets of strings.
//!
//! A shape with `N` symmetry steps is the set of `N` vertices of a regular
//! polygon inscribed in the unit circle: 5 yields a pentagram, 6 a hexagon.
//! Vertex `k` sits at
//! ```text
//! angle_k = starting_angle + k * (360° / N)
//! point_k = (cos(angle_k), sin(angle_k))
//! ```
//! A partial shape keeps only the first `n_partial` vertices, for when only
//! some of the rotational copies are needed.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::ShapeMismatch;

/// Create a set of strings around (0, 0) that is symmetric under
/// `n_symmetry` rotations.
///
/// # Arguments
///
/// * `n_symmetry` - Number of rotational symmetry steps
/// * `starting_angle` - Angle of the first string with respect to the x axis,
///   radians, counter-clockwise
/// * `n_partial` - If nonzero, only the first `n_partial` strings are created;
///   0 creates the full shape
///
/// # Returns
///
/// String positions of the n-gon, shape `(n_symmetry, 2)`, or
/// `(n_partial, 2)` for a partial shape.
///
/// # Errors
///
/// - [`ShapeMismatch::ZeroSymmetry`] if `n_symmetry` is 0
/// - [`ShapeMismatch::Partial`] if `n_partial >= n_symmetry`
pub fn create_symmetry(
    n_symmetry: usize,
    starting_angle: f64,
    n_partial: usize,
) -> Result<Array2<f64>, ShapeMismatch> {
    if n_symmetry == 0 {
        log::debug!("rejecting symmetric shape without rotational steps");
        return Err(ShapeMismatch::ZeroSymmetry);
    }
    if n_partial >= n_symmetry {
        log::debug!(
            "rejecting partial count {} for {}-fold symmetry",
            n_partial,
            n_symmetry
        );
        return Err(ShapeMismatch::Partial {
            n_partial,
            n_symmetry,
        });
    }

    let sym_angle = (360.0 / n_symmetry as f64).to_radians();
    let count = if n_partial == 0 { n_symmetry } else { n_partial };
    log::trace!(
        "creating {} of {} strings starting at {:.4} rad",
        count,
        n_symmetry,
        starting_angle
    );

    Ok(Array2::from_shape_fn((count, 2), |(k, axis)| {
        let angle = starting_angle + sym_angle * k as f64;
        match axis {
            0 => angle.cos(),
            _ => angle.sin(),
        }
    }))
}

/// Parameters of a symmetric set of strings.
///
/// Carries the defaults of [`create_symmetry`]: the first string on the
/// x axis and the full shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymmetrySpec {
    /// Number of rotational symmetry steps (>= 1)
    pub n_symmetry: usize,
    /// Angle of the first string, radians, counter-clockwise
    #[serde(default)]
    pub starting_angle: f64,
    /// Number of strings to create, 0 for the full shape
    #[serde(default)]
    pub n_partial: usize,
}

impl SymmetrySpec {
    pub fn new(n_symmetry: usize) -> Self {
        Self {
            n_symmetry,
            starting_angle: 0.0,
            n_partial: 0,
        }
    }

    pub fn with_starting_angle(mut self, starting_angle: f64) -> Self {
        self.starting_angle = starting_angle;
        self
    }

    pub fn with_partial(mut self, n_partial: usize) -> Self {
        self.n_partial = n_partial;
        self
    }

    pub fn is_partial(&self) -> bool {
        self.n_partial != 0
    }

    /// Number of strings [`SymmetrySpec::build`] creates when the spec is valid.
    pub fn count(&self) -> usize {
        if self.is_partial() {
            self.n_partial
        } else {
            self.n_symmetry
        }
    }

    pub fn build(&self) -> Result<Array2<f64>, ShapeMismatch> {
        create_symmetry(self.n_symmetry, self.starting_angle, self.n_partial)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
