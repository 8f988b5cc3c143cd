//! Embedded SQL engine boundary
//!
//! Bindings to the sql.js runtime: the async loader, the in-memory database
//! constructor, and the execute primitive. The rest of the crate talks to the
//! engine through [`SqlEngine`], so the query path runs against a double in
//! unit tests.

use js_sys::{Reflect, Uint8Array};
use querypad_types::{ErrorCode, ErrorInfo, ResultSet};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::{js_message, Error};

#[wasm_bindgen]
extern "C" {
    /// Engine loader, provided by the page shell as a global.
    #[wasm_bindgen(js_name = initSqlJs, catch)]
    fn init_sql_js(config: &JsValue) -> Result<js_sys::Promise, JsValue>;

    /// In-memory database handle constructed from a snapshot image.
    pub type Database;

    #[wasm_bindgen(method, structural, catch)]
    fn exec(this: &Database, sql: &str) -> Result<JsValue, JsValue>;
}

/// Executes SQL against the in-memory database.
pub trait SqlEngine {
    /// Run `sql` and return every result set it produced, in order. A failed
    /// statement carries the engine's own message.
    fn exec(&self, sql: &str) -> Result<Vec<ResultSet>, ErrorInfo>;
}

/// Load the engine runtime, resolving its artifacts against `cdn_base`.
pub async fn load_runtime(cdn_base: &str) -> Result<JsValue, Error> {
    let config = js_sys::Object::new();
    let base = cdn_base.trim_end_matches('/').to_owned();
    let locate =
        Closure::<dyn Fn(String) -> String>::new(move |file: String| format!("{base}/{file}"));
    Reflect::set(&config, &JsValue::from_str("locateFile"), locate.as_ref())
        .map_err(|err| Error::EngineLoad(js_message(&err)))?;
    // The runtime keeps calling the lookup while it loads artifacts.
    locate.forget();

    let promise = init_sql_js(&config).map_err(|err| Error::EngineLoad(js_message(&err)))?;
    JsFuture::from(promise)
        .await
        .map_err(|err| Error::EngineLoad(js_message(&err)))
}

/// sql.js-backed engine owning the page's single database handle.
pub struct SqlJsEngine {
    db: Database,
}

impl SqlJsEngine {
    /// Construct the database from a snapshot image.
    pub fn from_image(runtime: &JsValue, image: &Uint8Array) -> Result<Self, Error> {
        let ctor = Reflect::get(runtime, &JsValue::from_str("Database"))
            .map_err(|err| Error::EngineLoad(js_message(&err)))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| Error::EngineLoad("runtime has no Database constructor".into()))?;
        let args = js_sys::Array::of1(image);
        let db = Reflect::construct(&ctor, &args)
            .map_err(|err| Error::EngineLoad(js_message(&err)))?
            .unchecked_into::<Database>();
        Ok(SqlJsEngine { db })
    }
}

impl SqlEngine for SqlJsEngine {
    fn exec(&self, sql: &str) -> Result<Vec<ResultSet>, ErrorInfo> {
        let raw = self
            .db
            .exec(sql)
            .map_err(|err| ErrorInfo::new(ErrorCode::InvalidQuery, js_message(&err)))?;
        // An absent result value means "no result sets", not a failure.
        if raw.is_null() || raw.is_undefined() {
            return Ok(Vec::new());
        }
        serde_wasm_bindgen::from_value(raw).map_err(|err| {
            ErrorInfo::new(ErrorCode::EngineError, "unreadable result sets")
                .with_details(err.to_string())
        })
    }
}
