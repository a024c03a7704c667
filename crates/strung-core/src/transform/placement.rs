use std::fmt::Display;

use ndarray::{aview1, Array2, ArrayBase, Data, Ix2};
use serde::{Deserialize, Serialize};

use super::{apply_displacement, apply_rotation, apply_transformations};
use crate::error::ShapeMismatch;

/// Where a baseline set of strings ends up: a rotation about the origin
/// followed by a displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    /// Rotation in radians, counter-clockwise
    #[serde(default)]
    pub rotation: f64,
    /// Displacement in the x and y-axis
    #[serde(default)]
    pub displacement: [f64; 2],
}

impl Placement {
    pub fn new(rotation: f64, displacement: [f64; 2]) -> Self {
        Self {
            rotation,
            displacement,
        }
    }

    /// The placement that leaves every string where it is.
    pub const fn identity() -> Self {
        Self {
            rotation: 0.0,
            displacement: [0.0, 0.0],
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Move `points` into place: rotate, then displace.
    pub fn apply<S>(&self, points: &ArrayBase<S, Ix2>) -> Result<Array2<f64>, ShapeMismatch>
    where
        S: Data<Elem = f64>,
    {
        apply_transformations(points, &aview1(&self.displacement), self.rotation)
    }

    /// Undo [`Placement::apply`]: displace back, then rotate back.
    pub fn revert<S>(&self, points: &ArrayBase<S, Ix2>) -> Result<Array2<f64>, ShapeMismatch>
    where
        S: Data<Elem = f64>,
    {
        let [dx, dy] = self.displacement;
        let centered = apply_displacement(points, &aview1(&[-dx, -dy]))?;
        apply_rotation(&centered, -self.rotation)
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "r: {:.3}°, t: ({:.3}, {:.3})",
            self.rotation.to_degrees(),
            self.displacement[0],
            self.displacement[1]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_identity() {
        let placement = Placement::identity();
        assert!(placement.is_identity());
        assert_eq!(placement, Placement::default());

        let points = array![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(placement.apply(&points).unwrap(), points);
    }

    #[test]
    fn test_not_identity() {
        assert!(!Placement::new(0.1, [0.0, 0.0]).is_identity());
        assert!(!Placement::new(0.0, [0.0, 1.0]).is_identity());
    }

    #[test]
    fn test_apply_matches_apply_transformations() {
        let placement = Placement::new(0.7, [3.0, -2.0]);
        let points = array![[1.0, 0.0], [0.5, 0.5]];
        let expected = apply_transformations(&points, &array![3.0, -2.0], 0.7).unwrap();
        assert_eq!(placement.apply(&points).unwrap(), expected);
    }

    #[test]
    fn test_revert_undoes_apply() {
        let placement = Placement::new(FRAC_PI_2, [10.0, 5.0]);
        let points = array![[1.0, 0.0], [0.0, 2.0], [-3.0, 1.5]];
        let moved = placement.apply(&points).unwrap();
        let back = placement.revert(&moved).unwrap();
        for (a, b) in back.iter().zip(points.iter()) {
            assert!((a - b).abs() < 1e-12, "expected {}, got {}", b, a);
        }
    }

    #[test]
    fn test_apply_rejects_bad_points() {
        let err = Placement::identity().apply(&array![[1.0, 2.0, 3.0]]).unwrap_err();
        assert_eq!(err, ShapeMismatch::Points { shape: vec![1, 3] });
        let err = Placement::identity().revert(&array![[1.0]]).unwrap_err();
        assert_eq!(err, ShapeMismatch::Points { shape: vec![1, 1] });
    }

    #[test]
    fn test_display() {
        let placement = Placement::new(PI, [1.0, -2.5]);
        assert_eq!(placement.to_string(), "r: 180.000°, t: (1.000, -2.500)");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let placement: Placement = serde_json::from_str(r#"{"rotation": 1.5}"#).unwrap();
        assert_eq!(placement, Placement::new(1.5, [0.0, 0.0]));

        let placement: Placement = serde_json::from_str(r#"{"displacement": [2.0, 3.0]}"#).unwrap();
        assert_eq!(placement, Placement::new(0.0, [2.0, 3.0]));
    }

    #[test]
    fn test_deserialize_rejects_wrong_displacement_length() {
        let result: Result<Placement, _> = serde_json::from_str(r#"{"displacement": [1.0, 2.0, 3.0]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let placement = Placement::new(0.25, [4.0, 8.0]);
        let json = serde_json::to_string(&placement).unwrap();
        let parsed: Placement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, placement);
    }
}
