//! Tool-specific error types.

use reqwest::StatusCode;
use thiserror::Error;

use crate::github::ClientError;

/// Errors that can occur during tool operations.
///
/// [`ToolError::is_recoverable`] splits these into errors reported back to
/// the user as a tool result and errors that abort the invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// A parameter was missing or had the wrong type.
    #[error("{0}")]
    Validation(String),

    /// GitHub answered with a non-200 status. The body is passed through.
    #[error("failed to {action}: {body}")]
    RemoteApi {
        action: &'static str,
        status: StatusCode,
        body: String,
    },

    /// No client could be obtained from the factory.
    #[error("failed to get GitHub client: {0}")]
    ClientUnavailable(#[source] ClientError),

    /// The request itself failed (connection, timeout, undecodable payload).
    #[error("failed to {action}: {source}")]
    Transport {
        action: &'static str,
        #[source]
        source: ClientError,
    },

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    ReadBody(#[source] ClientError),

    /// A decoded payload could not be encoded back to JSON.
    #[error("failed to encode {subject}: {source}")]
    Encoding {
        subject: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The caller cancelled the request while it was in flight.
    #[error("{action} cancelled by client")]
    Cancelled { action: &'static str },
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether the error belongs in a tool result rather than aborting the call.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::RemoteApi { .. })
    }
}
