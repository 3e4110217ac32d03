//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Default GitHub REST API root.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// GitHub API access.
    pub github: GitHubConfig,

    /// Tool description overrides.
    pub translations: TranslationsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the GitHub REST client.
#[derive(Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// REST API root, e.g. `https://ghe.example.com/api/v3` for Enterprise Server.
    pub api_url: String,

    /// Personal access token sent as a bearer token.
    pub token: Option<String>,

    /// User-Agent header; GitHub rejects requests without one.
    pub user_agent: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Configuration for tool description translations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationsConfig {
    /// JSON file mapping translation keys to text.
    pub path: Option<PathBuf>,

    /// Where to write every translation in use once tools are built.
    pub export_path: Option<PathBuf>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_GITHUB_API_URL.to_string(),
            token: None,
            user_agent: format!("gist-mcp-server/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "gist-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            github: GitHubConfig::default(),
            translations: TranslationsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, ...). GitHub credentials use the names GitHub
    /// tooling already understands: `GITHUB_PERSONAL_ACCESS_TOKEN` and
    /// `GITHUB_API_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        match std::env::var("GITHUB_PERSONAL_ACCESS_TOKEN") {
            Ok(token) if !token.trim().is_empty() => {
                config.github.token = Some(token);
                info!("GitHub token loaded from environment");
            }
            _ => warn!(
                "GITHUB_PERSONAL_ACCESS_TOKEN not set - gist tools will fail until a token is provided"
            ),
        }

        if let Ok(api_url) = std::env::var("GITHUB_API_URL") {
            info!("Using GitHub API at {}", api_url);
            config.github.api_url = api_url;
        }

        if let Ok(timeout) = std::env::var("MCP_GITHUB_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.github.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid MCP_GITHUB_TIMEOUT_SECS={:?}, using {}s",
                    timeout, config.github.timeout_secs
                ),
            }
        }

        if let Ok(path) = std::env::var("MCP_TRANSLATIONS_PATH") {
            config.translations.path = Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("MCP_EXPORT_TRANSLATIONS") {
            config.translations.export_path = Some(PathBuf::from(path));
        }

        config
    }
}
