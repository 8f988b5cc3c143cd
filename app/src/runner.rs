//! Query execution path
//!
//! The runner owns the page's database handle (through its engine) and the
//! page surfaces; each invocation is one synchronous round trip from command
//! text to rendered tables or a surfaced error.

use crate::engine::SqlEngine;
use crate::page::Surfaces;
use crate::render;

/// Statement terminator appended to whatever the user typed. The text is
/// forwarded verbatim otherwise; there is no escaping or validation.
const TERMINATOR: char = ';';

/// Runs user commands against the in-memory database.
pub struct QueryRunner<E, P> {
    engine: E,
    page: P,
}

impl<E: SqlEngine, P: Surfaces> QueryRunner<E, P> {
    /// A runner is only constructed after boot, so the database handle exists
    /// before any command can run.
    pub fn new(engine: E, page: P) -> Self {
        QueryRunner { engine, page }
    }

    /// Page surfaces, for callers that read the command text or phase.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Execute one command: the previous error is cleared up front, previous
    /// output is replaced on success, and a failure surfaces the engine's own
    /// message.
    pub fn execute(&self, command_text: &str) {
        self.page.clear_error();
        let statement = format!("{command_text}{TERMINATOR}");
        match self.engine.exec(&statement) {
            Ok(results) => {
                self.page.clear_output();
                log::debug!("{} result set(s)", results.len());
                for result in &results {
                    self.page.append_table(&render::result_table(result));
                }
            }
            Err(error) => self.page.show_error(&error),
        }
    }
}
