//! Error types for SWAPI operations
//!
//! The taxonomy mirrors how failures are reported to callers: a non-2xx
//! answer carries the upstream body, transport problems carry the reqwest
//! message, and a body that fails to deserialize is its own category so it
//! never renders as a half-filled result.

use thiserror::Error;

/// Result alias for SWAPI operations.
pub type SwapiResult<T> = Result<T, SwapiError>;

/// Errors that can occur while talking to the upstream API.
#[derive(Debug, Error)]
pub enum SwapiError {
    /// Upstream answered with a non-success status code.
    #[error("upstream returned HTTP {status}: {body}")]
    UpstreamStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// Connection failure, timeout, or other transport-level error.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(#[from] serde_json::Error),
}

impl SwapiError {
    /// Whether the upstream itself reported the failure (status or
    /// transport), as opposed to a response we could not interpret.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            SwapiError::UpstreamStatus { .. } | SwapiError::Transport(_)
        )
    }
}
