//! WASM bindings for rotation, displacement and placement of string positions.
//!
//! Point sets are interleaved `Float64Array`s (`[x0, y0, x1, y1, ...]`); a
//! buffer with an odd number of values is rejected. Results come back in the
//! same layout.

use crate::types::{from_js, to_js_error};
use ndarray::aview1;
use strung_core::{
    apply_displacement as core_displace, apply_rotation as core_rotate,
    apply_transformations as core_transform, points_from_interleaved, points_into_interleaved,
    Placement, ShapeMismatch,
};
use wasm_bindgen::prelude::*;

/// Rotate string positions around (0, 0).
///
/// # Arguments
///
/// * `points` - Interleaved string positions
/// * `angle` - Rotation angle in radians (positive = counter-clockwise)
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rotated = apply_rotation(new Float64Array([1, 0]), Math.PI / 2);
/// // rotated ≈ [0, 1]
/// ```
#[wasm_bindgen]
pub fn apply_rotation(points: &[f64], angle: f64) -> Result<Vec<f64>, JsValue> {
    rotate(points, angle).map_err(to_js_error)
}

/// Displace string positions by `displacement`, which must hold exactly two values.
///
/// Apply only *after* rotating.
#[wasm_bindgen]
pub fn apply_displacement(points: &[f64], displacement: &[f64]) -> Result<Vec<f64>, JsValue> {
    displace(points, displacement).map_err(to_js_error)
}

/// Rotate string positions around (0, 0), then displace them.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const moved = apply_transformations(points, new Float64Array([10, 0]), Math.PI / 2);
/// ```
#[wasm_bindgen]
pub fn apply_transformations(
    points: &[f64],
    displacement: &[f64],
    angle: f64,
) -> Result<Vec<f64>, JsValue> {
    transform(points, displacement, angle).map_err(to_js_error)
}

/// Move string positions into place.
///
/// # Arguments
///
/// * `points` - Interleaved string positions
/// * `placement` - `{ rotation: number, displacement: [number, number] }`,
///   missing fields default to 0
#[wasm_bindgen]
pub fn apply_placement(points: &[f64], placement: JsValue) -> Result<Vec<f64>, JsValue> {
    let placement: Placement = from_js(placement, "placement")?;
    place(points, &placement).map_err(to_js_error)
}

/// Move placed string positions back to their baseline around (0, 0).
#[wasm_bindgen]
pub fn revert_placement(points: &[f64], placement: JsValue) -> Result<Vec<f64>, JsValue> {
    let placement: Placement = from_js(placement, "placement")?;
    unplace(points, &placement).map_err(to_js_error)
}

fn rotate(points: &[f64], angle: f64) -> Result<Vec<f64>, ShapeMismatch> {
    let points = points_from_interleaved(points)?;
    let rotated = core_rotate(&points, angle)?;
    Ok(points_into_interleaved(&rotated))
}

fn displace(points: &[f64], displacement: &[f64]) -> Result<Vec<f64>, ShapeMismatch> {
    let points = points_from_interleaved(points)?;
    let displaced = core_displace(&points, &aview1(displacement))?;
    Ok(points_into_interleaved(&displaced))
}

fn transform(points: &[f64], displacement: &[f64], angle: f64) -> Result<Vec<f64>, ShapeMismatch> {
    let points = points_from_interleaved(points)?;
    let moved = core_transform(&points, &aview1(displacement), angle)?;
    Ok(points_into_interleaved(&moved))
}

fn place(points: &[f64], placement: &Placement) -> Result<Vec<f64>, ShapeMismatch> {
    let points = points_from_interleaved(points)?;
    Ok(points_into_interleaved(&placement.apply(&points)?))
}

fn unplace(points: &[f64], placement: &Placement) -> Result<Vec<f64>, ShapeMismatch> {
    let points = points_from_interleaved(points)?;
    Ok(points_into_interleaved(&placement.revert(&points)?))
}
