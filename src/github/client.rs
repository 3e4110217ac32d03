//! Client abstractions for the GitHub gists API.
//!
//! Tools never talk to reqwest directly. They ask a [`ClientFactory`] for a
//! [`GistClient`] and receive an [`ApiResponse`] whose body is read exactly
//! once and released when the response is dropped.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;

use super::ClientError;

/// Which collection of gists a list call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GistScope {
    /// Gists owned by the authenticated user.
    All,
    /// Gists the authenticated user has starred.
    Starred,
}

impl GistScope {
    /// Path segments below the API root.
    pub fn segments(&self) -> &'static [&'static str] {
        match self {
            Self::All => &["gists"],
            Self::Starred => &["gists", "starred"],
        }
    }
}

/// Page options forwarded to list endpoints as query parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// The unread body of an HTTP response.
///
/// Implementations release the underlying connection on drop.
#[async_trait]
pub trait ResponseBody: Send {
    /// Read the remaining body to the end.
    async fn read_all(&mut self) -> Result<Vec<u8>, ClientError>;
}

/// An HTTP response from the GitHub API.
pub struct ApiResponse {
    status: StatusCode,
    body: Box<dyn ResponseBody>,
}

impl ApiResponse {
    /// Wrap a status code and an unread body.
    pub fn new(status: StatusCode, body: impl ResponseBody + 'static) -> Self {
        Self {
            status,
            body: Box::new(body),
        }
    }

    /// HTTP status code of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Drain the body. The response, and with it the body, is dropped on return.
    pub async fn into_bytes(mut self) -> Result<Vec<u8>, ClientError> {
        self.body.read_all().await
    }
}

impl std::fmt::Debug for ApiResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Authenticated access to the gists endpoints.
#[async_trait]
pub trait GistClient: Send + Sync {
    /// `GET /gists/{gist_id}`
    async fn get_gist(&self, gist_id: &str) -> Result<ApiResponse, ClientError>;

    /// `GET /gists` or `GET /gists/starred`, depending on `scope`.
    async fn list_gists(
        &self,
        scope: GistScope,
        options: ListOptions,
    ) -> Result<ApiResponse, ClientError>;
}

/// Hands out a ready-to-use [`GistClient`] for one tool invocation.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    async fn client(&self) -> Result<Arc<dyn GistClient>, ClientError>;
}
