//! Error type for shape contract violations.

use thiserror::Error;

/// An input did not conform to its documented shape.
///
/// Every variant is a caller-side contract violation. Nothing inside the
/// library is left in a partial state when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeMismatch {
    /// A point set whose trailing dimension is not 2.
    #[error("points needs to have shape (N, 2) but has shape {}.", fmt_shape(.shape))]
    Points { shape: Vec<usize> },

    /// A displacement that is not a plain 2-vector.
    #[error("displacement needs to have shape (2,) but has shape {}.", fmt_shape(.shape))]
    Displacement { shape: Vec<usize> },

    /// A partial count that does not truncate the full symmetric shape.
    #[error("N_partial ({n_partial}) is larger than N_symmetry ({n_symmetry}).")]
    Partial { n_partial: usize, n_symmetry: usize },

    /// A symmetric shape without any rotational step.
    #[error("N_symmetry needs to be at least 1.")]
    ZeroSymmetry,
}

impl ShapeMismatch {
    pub(crate) fn points(shape: &[usize]) -> Self {
        log::debug!("rejecting point set with shape {}", fmt_shape(shape));
        ShapeMismatch::Points {
            shape: shape.to_vec(),
        }
    }

    pub(crate) fn displacement(shape: &[usize]) -> Self {
        log::debug!("rejecting displacement with shape {}", fmt_shape(shape));
        ShapeMismatch::Displacement {
            shape: shape.to_vec(),
        }
    }
}

/// Render an array shape the way tuples print: `(3, 2)`, `(2,)`, `()`.
pub fn fmt_shape(shape: &[usize]) -> String {
    match shape {
        [single] => format!("({},)", single),
        _ => {
            let dims: Vec<String> = shape.iter().map(|d| d.to_string()).collect();
            format!("({})", dims.join(", "))
        }
    }
}
