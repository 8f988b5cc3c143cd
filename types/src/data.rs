//! Result-set types for query execution

use serde::{Deserialize, Serialize};
use tsify::Tsify;

/// One statement's results, in the engine's wire shape
///
/// The embedded engine returns an array of these per execution: ordered
/// column names paired with ordered rows of scalar values. A result set is
/// transient; the next execution replaces it.
#[derive(Tsify, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct ResultSet {
    /// Column names, in engine order
    pub columns: Vec<String>,
    /// Row data as JSON values, one inner vector per row
    pub values: Vec<Vec<serde_json::Value>>,
}

impl ResultSet {
    /// Number of rows in this result set
    pub fn row_count(&self) -> usize {
        self.values.len()
    }
}
