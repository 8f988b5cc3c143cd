//! One-time page bootstrap
//!
//! Loads the engine runtime and fetches the database snapshot in parallel,
//! joins both, then wires the interactive query path. No query can run before
//! the join completes; if either load fails the page stays inert.

use std::rc::Rc;

use js_sys::Uint8Array;
use querypad_types::Phase;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use crate::engine::{self, SqlJsEngine};
use crate::error::{js_message, Error, Result};
use crate::page::DomPage;
use crate::runner::QueryRunner;

/// Fixed location of the prebuilt database snapshot.
pub const SNAPSHOT_URL: &str = "/snapshot.db";

/// Where the engine runtime resolves its artifacts from.
pub const ENGINE_CDN_BASE: &str = "https://cdnjs.cloudflare.com/ajax/libs/sql.js/1.6.1";

/// Load everything the console needs and enable it. There is no retry and no
/// timeout; a failure here is fatal for the page.
pub async fn boot() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| Error::EngineLoad("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| Error::EngineLoad("no document".into()))?;
    let page = DomPage::locate(&document)?;
    page.set_phase(Phase::Loading);

    let engine = match load(&window).await {
        Ok(engine) => engine,
        Err(err) => {
            page.set_phase(Phase::Failed);
            return Err(err);
        }
    };

    let runner = Rc::new(QueryRunner::new(engine, page));
    attach_execute(&runner);
    runner.page().set_phase(Phase::Ready);
    log::info!("console ready");
    Ok(())
}

/// Parallel engine + snapshot load, joined. The database handle exists only
/// if both sides succeed.
async fn load(window: &Window) -> Result<SqlJsEngine> {
    let (runtime, image) = futures::try_join!(
        engine::load_runtime(ENGINE_CDN_BASE),
        fetch_snapshot(window, SNAPSHOT_URL),
    )?;
    log::info!("engine runtime ready, snapshot is {} bytes", image.length());
    SqlJsEngine::from_image(&runtime, &image)
}

/// Fetch the snapshot image. A non-success status is a load failure; an error
/// page must not reach the database constructor.
async fn fetch_snapshot(window: &Window, url: &str) -> Result<Uint8Array> {
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| Error::SnapshotFetch(js_message(&err)))?
        .dyn_into()
        .map_err(|_| Error::SnapshotFetch("fetch returned a non-response".into()))?;
    if !response.ok() {
        return Err(Error::SnapshotFetch(format!(
            "HTTP {} for {url}",
            response.status()
        )));
    }
    let buffer = JsFuture::from(
        response
            .array_buffer()
            .map_err(|err| Error::SnapshotFetch(js_message(&err)))?,
    )
    .await
    .map_err(|err| Error::SnapshotFetch(js_message(&err)))?;
    Ok(Uint8Array::new(&buffer))
}

/// Run the editor contents on every click of the execute button.
fn attach_execute(runner: &Rc<QueryRunner<SqlJsEngine, DomPage>>) {
    let handler = {
        let runner = Rc::clone(runner);
        Closure::<dyn Fn()>::new(move || {
            let text = runner.page().command_text();
            runner.execute(&text);
        })
    };
    runner
        .page()
        .execute_button()
        .set_onclick(Some(handler.as_ref().unchecked_ref()));
    // The handler lives for the page lifetime.
    handler.forget();
}
