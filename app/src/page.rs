//! Page surfaces: the named UI regions the console mutates
//!
//! [`Surfaces`] is the seam between the query path and the DOM; the runner
//! only ever sees this trait, and unit tests substitute a recording double.

use querypad_types::{ErrorInfo, Phase};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlTextAreaElement};

use crate::error::{js_message, Error, Result};

/// Element ids the page shell must provide.
const COMMANDS_ID: &str = "commands";
const EXECUTE_ID: &str = "execute";
const OUTPUT_ID: &str = "output";
const ERROR_ID: &str = "error";

/// UI regions the query path writes to.
pub trait Surfaces {
    /// Drop all rendered tables.
    fn clear_output(&self);
    /// Append one rendered table after the existing output.
    fn append_table(&self, html: &str);
    /// Make the error region visible with `error`'s message. Latest call
    /// wins; there is no history.
    fn show_error(&self, error: &ErrorInfo);
    /// Hide the error region.
    fn clear_error(&self);
}

/// DOM-backed page regions, looked up once at construction.
pub struct DomPage {
    commands: HtmlTextAreaElement,
    execute: HtmlButtonElement,
    output: HtmlElement,
    error: HtmlElement,
}

impl DomPage {
    /// Locate the named regions in `document`. A missing region fails the
    /// boot.
    pub fn locate(document: &Document) -> Result<Self> {
        Ok(DomPage {
            commands: lookup(document, COMMANDS_ID)?,
            execute: lookup(document, EXECUTE_ID)?,
            output: lookup(document, OUTPUT_ID)?,
            error: lookup(document, ERROR_ID)?,
        })
    }

    /// Snapshot of the command text at execution time.
    pub fn command_text(&self) -> String {
        self.commands.value()
    }

    /// Execute button, for click wiring.
    pub fn execute_button(&self) -> &HtmlButtonElement {
        &self.execute
    }

    /// Reflect the boot state machine onto the page: the execute control is
    /// enabled only once the database is ready.
    pub fn set_phase(&self, phase: Phase) {
        self.execute.set_disabled(!phase.interactive());
    }
}

fn lookup<T: JsCast>(document: &Document, id: &'static str) -> Result<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(Error::MissingElement(id))
}

impl Surfaces for DomPage {
    fn clear_output(&self) {
        self.output.set_inner_html("");
    }

    fn append_table(&self, html: &str) {
        if let Err(err) = self.output.insert_adjacent_html("beforeend", html) {
            log::error!("failed to append table: {}", js_message(&err));
        }
    }

    fn show_error(&self, error: &ErrorInfo) {
        match &error.details {
            Some(details) => log::error!("{error}: {details}"),
            None => log::error!("{error}"),
        }
        self.error.set_text_content(Some(&error.message));
        // Visibility is a height toggle, so the region keeps its place in the
        // layout while hidden.
        let _ = self.error.style().set_property("height", "2em");
    }

    fn clear_error(&self) {
        let _ = self.error.style().set_property("height", "0");
    }
}
