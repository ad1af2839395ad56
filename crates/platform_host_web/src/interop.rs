//! Shared JS value conversion helpers for browser adapters.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Renders a rejected promise or thrown JS value as a diagnostic string.
#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

/// Media durations are `NaN` before metadata loads and `Infinity` for live streams.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn finite_duration(raw: f64) -> Option<f64> {
    (raw.is_finite() && raw > 0.0).then_some(raw)
}
