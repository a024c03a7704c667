//! Conversions between JavaScript values and core types.
//!
//! Every binding does its work on core types first and converts at the very
//! end, so the conversion helpers here are the only place that builds a
//! `JsValue`.

use serde::de::DeserializeOwned;
use strung_core::ShapeMismatch;
use wasm_bindgen::prelude::*;

/// Turn a shape error into a JS `Error` carrying the same message.
pub(crate) fn to_js_error(err: ShapeMismatch) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Deserialize a plain JS object into a core parameter type.
///
/// `what` names the parameter in the error message.
pub(crate) fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| js_sys::Error::new(&format!("Invalid {}: {}", what, e)).into())
}

/// WASM-specific tests that require JsValue.
///
/// These helpers build `JsValue`s and can only run on wasm32 targets. Use
/// `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use strung_core::{Placement, SymmetrySpec};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_error_message_preserved() {
        let err = to_js_error(ShapeMismatch::Points { shape: vec![1, 3] });
        let err: js_sys::Error = err.dyn_into().unwrap();
        assert_eq!(
            String::from(err.message()),
            "points needs to have shape (N, 2) but has shape (1, 3)."
        );
    }

    #[wasm_bindgen_test]
    fn test_from_js_placement() {
        let value = serde_wasm_bindgen::to_value(&Placement::new(0.5, [1.0, 2.0])).unwrap();
        let placement: Placement = from_js(value, "placement").unwrap();
        assert_eq!(placement, Placement::new(0.5, [1.0, 2.0]));
    }

    #[wasm_bindgen_test]
    fn test_from_js_invalid_spec() {
        let value = serde_wasm_bindgen::to_value(&"not a spec").unwrap();
        let result: Result<SymmetrySpec, _> = from_js(value, "symmetry spec");
        let err: js_sys::Error = result.unwrap_err().dyn_into().unwrap();
        assert!(String::from(err.message()).starts_with("Invalid symmetry spec"));
    }
}
