use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable error codes. Callers match on these rather than on messages.
pub mod codes {
    pub const VALIDATION_COMMAND_INVALID: &str = "VALIDATION_COMMAND_INVALID";
    pub const VALIDATION_INCIDENT_INVALID: &str = "VALIDATION_INCIDENT_INVALID";
    pub const TRANSITION_UNSUPPORTED: &str = "TRANSITION_UNSUPPORTED";
    pub const LOAD_RECORD_INVALID: &str = "LOAD_RECORD_INVALID";
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";

    pub const STORE_INVALID_PATH: &str = "STORE_INVALID_PATH";
    pub const STORE_NOT_FOUND: &str = "STORE_NOT_FOUND";
    pub const STORE_READ_FAILED: &str = "STORE_READ_FAILED";
    pub const STORE_DECODE_FAILED: &str = "STORE_DECODE_FAILED";
    pub const STORE_VERSION_MISMATCH: &str = "STORE_VERSION_MISMATCH";
    pub const STORE_ENCODE_FAILED: &str = "STORE_ENCODE_FAILED";
    pub const STORE_WRITE_FAILED: &str = "STORE_WRITE_FAILED";
}

/// Single structured error shape shared by the command, incident, list and store layers.
///
/// Every error is synchronous and final for the operation that produced it; nothing in this
/// crate retries, so `retryable` is only ever set by callers that wrap these errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
    pub retryable: bool,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            retryable: false,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
