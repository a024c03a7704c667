//! Strung WASM - WebAssembly bindings for Strung
//!
//! This crate exposes the strung-core placement functions to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `transform` - Rotation, displacement and placement of string positions
//! - `symmetry` - Rotationally symmetric sets of strings
//! - `types` - Conversions between JS values and core types
//!
//! Point sets cross the boundary as interleaved `Float64Array`s
//! (`[x0, y0, x1, y1, ...]`).
//!
//! # Usage
//!
//! ```typescript
//! import init, { create_symmetry, apply_transformations } from '@strung/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Hexagon of strings, rotated by 15° and moved to (4, 2)
//! const hexagon = create_symmetry(6, 0, 0);
//! const placed = apply_transformations(hexagon, new Float64Array([4, 2]), Math.PI / 12);
//! ```

use wasm_bindgen::prelude::*;

mod symmetry;
mod transform;
mod types;

// Re-export public bindings
pub use symmetry::{create_symmetry, create_symmetry_from_spec};
pub use transform::{
    apply_displacement, apply_placement, apply_rotation, apply_transformations, revert_placement,
};

/// Initialize the WASM module (called automatically on load)
///
/// Installs the panic hook and routes `log` records to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_ok() {
        log::info!("strung-wasm {} ready", version());
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
