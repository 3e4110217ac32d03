//! reqwest-backed GitHub REST client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument};

use super::{ApiResponse, ClientError, ClientFactory, GistClient, GistScope, ListOptions, ResponseBody};
use crate::core::config::GitHubConfig;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub REST API client authenticated with a personal access token.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GitHubClient {
    /// Build a client from configuration.
    ///
    /// Fails when no token is configured or the base URL is unusable.
    pub fn new(config: &GitHubConfig) -> Result<Self, ClientError> {
        let token = config
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ClientError::MissingToken)?;

        let base_url = Url::parse(&config.api_url)
            .map_err(|e| ClientError::invalid_url(&config.api_url, e))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::invalid_url(&config.api_url, "not a base URL"));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|_| ClientError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL all endpoints are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve path segments (percent-encoded) and an optional query.
    fn endpoint(&self, segments: &[&str], query: &str) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(self.base_url.as_str(), "not a base URL"))?
            .pop_if_empty()
            .extend(segments);
        url.set_query(if query.is_empty() { None } else { Some(query) });
        Ok(url)
    }

    async fn send(&self, url: Url) -> Result<ApiResponse, ClientError> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        debug!("GitHub responded with {}", response.status());
        Ok(ApiResponse::new(
            response.status(),
            ReqwestBody(Some(response)),
        ))
    }
}

#[async_trait]
impl GistClient for GitHubClient {
    #[instrument(skip(self))]
    async fn get_gist(&self, gist_id: &str) -> Result<ApiResponse, ClientError> {
        let url = self.endpoint(&["gists", gist_id], "")?;
        self.send(url).await
    }

    #[instrument(skip(self))]
    async fn list_gists(
        &self,
        scope: GistScope,
        options: ListOptions,
    ) -> Result<ApiResponse, ClientError> {
        let query = serde_urlencoded::to_string(options)?;
        let url = self.endpoint(scope.segments(), &query)?;
        self.send(url).await
    }
}

/// Body backed by a live reqwest response. Dropping it closes the body.
struct ReqwestBody(Option<reqwest::Response>);

#[async_trait]
impl ResponseBody for ReqwestBody {
    async fn read_all(&mut self) -> Result<Vec<u8>, ClientError> {
        match self.0.take() {
            Some(response) => Ok(response.bytes().await?.to_vec()),
            None => Ok(Vec::new()),
        }
    }
}

/// Builds the [`GitHubClient`] on first use and shares it afterwards.
pub struct GitHubClientFactory {
    config: GitHubConfig,
    client: OnceCell<Arc<GitHubClient>>,
}

impl GitHubClientFactory {
    /// Create a factory for the given configuration.
    pub fn new(config: GitHubConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }
}

#[async_trait]
impl ClientFactory for GitHubClientFactory {
    async fn client(&self) -> Result<Arc<dyn GistClient>, ClientError> {
        let client = self
            .client
            .get_or_try_init(|| async {
                let client = GitHubClient::new(&self.config)?;
                info!("GitHub client ready for {}", client.base_url());
                Ok::<_, ClientError>(Arc::new(client))
            })
            .await?;
        let client: Arc<dyn GistClient> = client.clone();
        Ok(client)
    }
}
