//! Error types shared with the page shell

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tsify::Tsify;

/// Error information surfaced to the user
///
/// The error region displays `message`; `details` only reaches the console
/// log.
#[derive(Tsify, Serialize, Deserialize, Error, Clone, Debug)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[error("{message}")]
pub struct ErrorInfo {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Standard error codes
#[derive(Tsify, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub enum ErrorCode {
    /// The engine rejected the statement
    InvalidQuery,
    /// Network request failed
    NetworkError,
    /// The engine failed to load or produced unreadable results
    EngineError,
    /// Unknown error
    Unknown,
}

impl ErrorInfo {
    /// Create an error with a code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ErrorInfo {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach details to an error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
