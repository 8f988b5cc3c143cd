//! querypad - an in-browser SQL console over a static database snapshot
//!
//! The page loads the embedded SQL engine and a prebuilt database image in
//! parallel, constructs an in-memory database from the image, and then runs
//! whatever the user types against it, one click at a time. Each result set
//! is rendered as a table in engine order; a failed statement surfaces the
//! engine's own message in the error region.

use wasm_bindgen::prelude::*;

pub mod bootstrap;
pub mod engine;
pub mod error;
pub mod page;
pub mod render;
pub mod runner;

// Re-export shared types
pub use querypad_types::{ErrorCode, ErrorInfo, Phase, ResultSet};

/// Set up the wasm side of the page
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Debug).ok();

    log::info!("querypad initialized");
}

/// Load the engine and snapshot, then enable the console.
///
/// The returned promise rejects if either load fails; the page stays inert in
/// that case.
#[wasm_bindgen]
pub async fn boot() -> Result<(), JsValue> {
    bootstrap::boot().await.map_err(|err| {
        log::error!("boot failed: {err}");
        JsValue::from_str(&err.to_string())
    })
}
