//! Error types for the console

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// The main error type for console setup and execution
#[derive(Error, Debug)]
pub enum Error {
    #[error("Engine load error: {0}")]
    EngineLoad(String),

    #[error("Snapshot fetch error: {0}")]
    SnapshotFetch(String),

    #[error("Page error: element '{0}' not found")]
    MissingElement(&'static str),
}

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, Error>;

/// Render an opaque JS error value as a message string.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else {
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"))
    }
}
