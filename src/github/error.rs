//! GitHub client error types.

use thiserror::Error;

/// Errors raised while building or using a GitHub API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No personal access token was configured.
    #[error("GitHub token is not configured (set GITHUB_PERSONAL_ACCESS_TOKEN)")]
    MissingToken,

    /// The configured token cannot be sent as an HTTP header.
    #[error("GitHub token contains characters that are not valid in an HTTP header")]
    InvalidToken,

    /// The configured API base URL could not be parsed.
    #[error("Invalid GitHub API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request or connection failure from reqwest, including timeouts.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Pagination options could not be encoded as a query string.
    #[error("Failed to encode query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// A successful response body did not match the expected schema.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Failure injected by the in-memory test fakes.
    #[cfg(test)]
    #[error("{0}")]
    Other(String),
}

impl ClientError {
    /// Create an invalid URL error.
    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    #[cfg(test)]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
