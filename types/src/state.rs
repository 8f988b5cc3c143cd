//! Page lifecycle state

use serde::{Deserialize, Serialize};
use tsify::Tsify;

/// Boot state of the console page
///
/// Both remote loads must finish before the page leaves `Loading`; queries
/// may only execute in `Ready`.
#[derive(Tsify, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Engine and snapshot loads still in flight
    Loading,
    /// Database constructed, interactive use enabled
    Ready,
    /// A load failed; the page stays inert
    Failed,
}

impl Phase {
    /// Whether interactive execution is allowed
    pub fn interactive(&self) -> bool {
        matches!(self, Phase::Ready)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Loading
    }
}
