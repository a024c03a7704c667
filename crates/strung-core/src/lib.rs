//! Strung Core - 2D placement of string positions
//!
//! This crate positions point-like entities ("strings") around an origin:
//! rotating a baseline set about (0, 0), displacing it, and generating
//! rotationally symmetric baseline sets on the unit circle.
//!
//! Point sets are `(N, 2)` [`ndarray`] arrays. Every operation is a pure
//! function that returns a new array and reports contract violations as a
//! [`ShapeMismatch`].
//!
//! # Example
//!
//! ```ignore
//! use strung_core::{Placement, SymmetrySpec};
//!
//! // Hexagon of strings, rotated by 15° and moved to (4, 2)
//! let hexagon = SymmetrySpec::new(6).build()?;
//! let placed = Placement::new(15f64.to_radians(), [4.0, 2.0]).apply(&hexagon)?;
//! ```

pub mod error;
pub mod points;
pub mod symmetry;
pub mod transform;

pub use error::ShapeMismatch;
pub use points::{points_from_interleaved, points_into_interleaved};
pub use symmetry::{create_symmetry, SymmetrySpec};
pub use transform::{
    apply_displacement, apply_rotation, apply_transformations, rotation_matrix, Placement,
};
