//! GitHub API access for the gist tools.
//!
//! - `client.rs` - `GistClient` / `ClientFactory` traits and response types
//! - `rest.rs` - reqwest implementation authenticated with a token
//! - `models.rs` - the gist object model
//! - `error.rs` - client error types

mod client;
mod error;
pub mod models;
mod rest;

#[cfg(test)]
pub mod testing;

pub use client::{ApiResponse, ClientFactory, GistClient, GistScope, ListOptions, ResponseBody};
pub use error::ClientError;
pub use models::{Gist, GistFile, GistOwner};
pub use rest::{GitHubClient, GitHubClientFactory};
