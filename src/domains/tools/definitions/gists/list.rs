//! List gists tool definition.
//!
//! Lists the gists owned by the authenticated user.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{JsonObject, Tool},
};
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use super::common::{list_in_scope, read_only_annotations};
use super::pagination::PaginationParams;
use crate::domains::tools::{ToolOutcome, Translations};
use crate::github::{ClientFactory, GistScope};

// ============================================================================
// Tool Definition
// ============================================================================

/// List gists tool - the authenticated user's own gists.
pub struct ListGistsTool;

impl ListGistsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_gists";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(
        arguments: &JsonObject,
        factory: &dyn ClientFactory,
        ct: &CancellationToken,
    ) -> ToolOutcome {
        let params = match PaginationParams::from_arguments(arguments) {
            Ok(p) => p,
            Err(e) => return e.into(),
        };
        info!("List gists tool called ({:?})", params);

        list_in_scope(factory, ct, GistScope::All, params.into()).await
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        factory: Arc<dyn ClientFactory>,
    ) -> Result<serde_json::Value, String> {
        let arguments = super::common::arguments_object(arguments);
        Self::execute(&arguments, factory.as_ref(), &CancellationToken::new())
            .await
            .into_http_value()
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(t: &Translations) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(
                t.get(
                    "TOOL_LIST_GISTS_DESCRIPTION",
                    "List the gists of the authenticated user.",
                )
                .into(),
            ),
            input_schema: cached_schema_for_type::<PaginationParams>(),
            annotations: Some(read_only_annotations(
                t.get("TOOL_LIST_GISTS_USER_TITLE", "List gists"),
            )),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(factory: Arc<dyn ClientFactory>, t: &Translations) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(t), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let ct = ctx.request_context.ct.clone();
            let factory = factory.clone();
            async move {
                Self::execute(&args, factory.as_ref(), &ct)
                    .await
                    .into_call_result()
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
