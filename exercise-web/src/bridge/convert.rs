//! Serde ↔ JsValue conversion

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Serialize to a plain JS object. Maps become objects (not `Map`) and
/// `None` becomes `null`, so the dashboard can read fields directly.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("serialization failed: {}", e)))
}
