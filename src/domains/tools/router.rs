//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; the router only needs the
//! client factory and translations they are built with.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::Translations;
use super::definitions::{GetGistTool, ListGistsTool, ListStarredGistsTool};
use crate::github::ClientFactory;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(factory: Arc<dyn ClientFactory>, t: &Translations) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetGistTool::create_route(factory.clone(), t))
        .with_route(ListGistsTool::create_route(factory.clone(), t))
        .with_route(ListStarredGistsTool::create_route(factory, t))
}
