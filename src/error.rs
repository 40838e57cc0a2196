//! Error and result types.
//!
//! The loader reports a single [`LoadError`] kind; everything above it (terminal
//! setup, the event loop) uses `anyhow`.

use thiserror::Error;

/// Result type for the binary and the event loop.
pub type Result<T> = anyhow::Result<T>;

/// The one way loading the user list can fail.
///
/// Transport, HTTP status and decode failures are not told apart; the message
/// only exists for the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load users: {reason}")]
pub struct LoadError {
    reason: String,
}

impl LoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("transport: {err}"))
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("invalid JSON payload: {err}"))
    }
}
