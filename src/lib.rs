//! Gist MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing GitHub
//! gists as read-only tools.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, the main server and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: `get_gist`, `list_gists` and `list_starred_gists`
//! - **github**: The GitHub client traits, their reqwest implementation and the gist model
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gist_mcp_server::{
//!     core::{Config, McpServer},
//!     domains::tools::Translations,
//!     github::GitHubClientFactory,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let factory = Arc::new(GitHubClientFactory::new(config.github.clone()));
//!     let server = McpServer::new(config, factory, Arc::new(Translations::new()));
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod github;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
