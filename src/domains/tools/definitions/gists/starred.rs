//! List starred gists tool definition.

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

/// List starred gists tool - gists the authenticated user has starred.
pub struct ListStarredGistsTool;

impl ListStarredGistsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_starred_gists";

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
        info!("List starred gists tool called ({:?})", params);

        list_in_scope(factory, ct, GistScope::Starred, params.into()).await
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
                    "TOOL_LIST_STARRED_DESCRIPTION",
                    "List the starred gists of the authenticated user.",
                )
                .into(),
            ),
            input_schema: cached_schema_for_type::<PaginationParams>(),
            annotations: Some(read_only_annotations(t.get(
                "TOOL_LIST_STARRED_GISTS_USER_TITLE",
                "List starred gists",
            ))),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::ListOptions;
    use crate::github::testing::{FakeClient, FakeFactory, RecordedCall};
    use serde_json::json;
    use std::collections::HashMap;

    async fn run(factory: &FakeFactory, arguments: serde_json::Value) -> ToolOutcome {
        let arguments = arguments.as_object().cloned().unwrap();
        ListStarredGistsTool::execute(&arguments, factory, &CancellationToken::new()).await
    }

    #[tokio::test]
    async fn test_list_starred_targets_starred_gists() {
        let factory = FakeFactory::new(FakeClient::responding(200, r#"[{"id":"9"}]"#));

        let outcome = run(&factory, json!({})).await;
        assert_eq!(outcome.text().as_deref(), Some(r#"[{"id":"9"}]"#));
        assert_eq!(
            factory.fake().calls(),
            vec![RecordedCall::List(GistScope::Starred, ListOptions::default())]
        );
        assert!(factory.fake().body_drained());
        assert!(factory.fake().body_closed());
    }

    #[tokio::test]
    async fn test_list_starred_error_status() {
        let factory = FakeFactory::new(FakeClient::responding(401, "Bad credentials"));

        let outcome = run(&factory, json!({})).await;
        assert_eq!(
            outcome.text().as_deref(),
            Some("failed to list starred gists: Bad credentials")
        );
        assert!(factory.fake().body_closed());
    }

    #[tokio::test]
    async fn test_list_starred_empty_list() {
        let factory = FakeFactory::new(FakeClient::responding(200, "[]"));

        let outcome = run(&factory, json!({"perPage": 1})).await;
        assert_eq!(outcome.text().as_deref(), Some("[]"));
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = ListStarredGistsTool::to_tool(&Translations::new());
        assert_eq!(tool.name, "list_starred_gists");
        assert_eq!(
            tool.description.as_deref(),
            Some("List the starred gists of the authenticated user.")
        );
    }

    #[tokio::test]
    async fn test_list_starred_invalid_page_makes_no_call() {
        let factory = FakeFactory::new(FakeClient::responding(200, "[]"));

        let outcome = run(&factory, json!({"page": "first"})).await;
        match outcome {
            ToolOutcome::Rejected(err) => {
                assert!(err.to_string().starts_with("invalid pagination parameters"))
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(factory.acquisitions(), 0);
        assert_eq!(factory.fake().call_count(), 0);
    }

    #[tokio::test]
    async fn test_list_starred_factory_failure() {
        let factory = FakeFactory::failing("token expired");

        let outcome = run(&factory, json!({"page": 1})).await;
        match outcome {
            ToolOutcome::Failed(err) => {
                assert_eq!(err.to_string(), "failed to get GitHub client: token expired");
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(factory.acquisitions(), 1);
        assert_eq!(factory.fake().call_count(), 0);
    }

    #[test]
    fn test_description_override_key() {
        let overrides = HashMap::from([(
            "TOOL_LIST_STARRED_DESCRIPTION".to_string(),
            "Starred gists, localized".to_string(),
        )]);
        let tool = ListStarredGistsTool::to_tool(&Translations::with_overrides(overrides));
        assert_eq!(tool.description.as_deref(), Some("Starred gists, localized"));
    }
}
