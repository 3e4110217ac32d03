//! GitHub gist tools.
//!
//! - `get`: fetch a single gist by id
//! - `list`: the authenticated user's gists
//! - `starred`: the authenticated user's starred gists
//!
//! All three share the request pipeline in `common` and return the GitHub
//! objects as JSON text.

pub mod common;
pub mod get;
pub mod list;
pub mod pagination;
pub mod starred;

pub use get::{GetGistParams, GetGistTool};
pub use list::ListGistsTool;
pub use pagination::PaginationParams;
pub use starred::ListStarredGistsTool;
