//! WASM bindings for rotationally symmetric sets of strings.

use crate::types::{from_js, to_js_error};
use strung_core::{
    create_symmetry as core_symmetry, points_into_interleaved, ShapeMismatch, SymmetrySpec,
};
use wasm_bindgen::prelude::*;

/// Create strings on the unit circle that are symmetric under `n_symmetry` rotations.
///
/// # Arguments
///
/// * `n_symmetry` - Number of rotational symmetry steps (5 = pentagram, 6 = hexagon)
/// * `starting_angle` - Angle of the first string in radians, counter-clockwise
/// * `n_partial` - Only create the first `n_partial` strings; 0 creates all of them
///
/// # Returns
///
/// Interleaved string positions, `2 * count` values.
///
/// # Errors
///
/// Returns an error if `n_symmetry` is 0 or `n_partial >= n_symmetry`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const square = create_symmetry(4, 0, 0);
/// // square ≈ [1, 0, 0, 1, -1, 0, 0, -1]
/// ```
#[wasm_bindgen]
pub fn create_symmetry(
    n_symmetry: u32,
    starting_angle: f64,
    n_partial: u32,
) -> Result<Vec<f64>, JsValue> {
    let spec = SymmetrySpec::new(n_symmetry as usize)
        .with_starting_angle(starting_angle)
        .with_partial(n_partial as usize);
    build(&spec).map_err(to_js_error)
}

/// Create a symmetric set of strings from a spec object.
///
/// # Arguments
///
/// * `spec` - `{ n_symmetry: number, starting_angle?: number, n_partial?: number }`
///
/// # Example (TypeScript)
///
/// ```typescript
/// const halfHexagon = create_symmetry_from_spec({ n_symmetry: 6, n_partial: 3 });
/// ```
#[wasm_bindgen]
pub fn create_symmetry_from_spec(spec: JsValue) -> Result<Vec<f64>, JsValue> {
    let spec: SymmetrySpec = from_js(spec, "symmetry spec")?;
    build(&spec).map_err(to_js_error)
}

fn build(spec: &SymmetrySpec) -> Result<Vec<f64>, ShapeMismatch> {
    let n_gon = core_symmetry(spec.n_symmetry, spec.starting_angle, spec.n_partial)?;
    Ok(points_into_interleaved(&n_gon))
}
