//! Formatting helpers shared by the wizard views.

use serde::Serialize;
use wasm_bindgen::JsValue;

/// Pretty-prints any serializable value for the raw JSON blocks.
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Formats an ISO timestamp with the browser's locale. Text the browser
/// cannot parse is returned as-is.
pub fn format_date(raw: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        raw.to_string()
    } else {
        String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
    }
}
