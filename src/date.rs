//! Header date label, formatted in the browser's default locale.

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

/// `Intl.DateTimeFormat` options, e.g. "Thu, 16 Oct"
#[derive(Serialize)]
struct DateLabelOptions {
    weekday: &'static str,
    day: &'static str,
    month: &'static str,
}

const DATE_LABEL_OPTIONS: DateLabelOptions = DateLabelOptions {
    weekday: "short",
    day: "numeric",
    month: "short",
};

/// Today's date, or `None` outside a browser
///
/// Calls `toLocaleDateString(undefined, options)` so the runtime picks the locale.
pub fn today_label() -> Option<String> {
    let options = serde_wasm_bindgen::to_value(&DATE_LABEL_OPTIONS)
        .map_err(|e| log::warn!("[APP] date options: {}", e))
        .ok()?;

    let today = js_sys::Date::new_0();
    let format = js_sys::Reflect::get(&today, &JsValue::from_str("toLocaleDateString"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    let label = format
        .call2(&today, &JsValue::UNDEFINED, &options)
        .map_err(|e| log::warn!("[APP] date format: {:?}", e))
        .ok()?;
    label.as_string()
}
