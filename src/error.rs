//! Error types for the browser glue.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No `window` (not running in a browser)
    #[error("window is not available")]
    NoWindow,

    #[error("document body is not available")]
    NoBody,

    /// Storage disabled or denied
    #[error("local storage is not available")]
    StorageUnavailable,

    /// Exception thrown by a browser API
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
