//! Get gist tool definition.
//!
//! Fetches a single gist by id and returns the GitHub object as JSON text.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use super::common::{fetch, read_only_annotations, required_str};
use crate::domains::tools::{ToolError, ToolOutcome, Translations};
use crate::github::{ClientFactory, Gist};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the get gist tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetGistParams {
    /// The id of the gist to retrieve
    pub gist_id: String,
}

impl GetGistParams {
    /// Extract parameters, reporting missing or mistyped values by name.
    pub fn from_arguments(arguments: &JsonObject) -> Result<Self, ToolError> {
        Ok(Self {
            gist_id: required_str(arguments, "gist_id")?,
        })
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Get gist tool - returns the details of one gist.
pub struct GetGistTool;

impl GetGistTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_gist";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(
        arguments: &JsonObject,
        factory: &dyn ClientFactory,
        ct: &CancellationToken,
    ) -> ToolOutcome {
        let params = match GetGistParams::from_arguments(arguments) {
            Ok(p) => p,
            Err(e) => return e.into(),
        };
        info!("Get gist tool called for id: {}", params.gist_id);

        let GetGistParams { gist_id } = params;
        fetch::<Gist, _, _>(factory, ct, "get gist", "gist", move |client| async move {
            client.get_gist(&gist_id).await
        })
        .await
        .into()
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
                    "TOOL_GET_GIST_DESCRIPTION",
                    "Get details of a specific gist in GitHub.",
                )
                .into(),
            ),
            input_schema: cached_schema_for_type::<GetGistParams>(),
            annotations: Some(read_only_annotations(
                t.get("TOOL_GET_GIST_USER_TITLE", "Get gist details"),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::testing::{FakeClient, FakeFactory, RecordedCall};
    use serde_json::json;

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    async fn run(factory: &FakeFactory, arguments: serde_json::Value) -> ToolOutcome {
        GetGistTool::execute(&args(arguments), factory, &CancellationToken::new()).await
    }

    #[tokio::test]
    async fn test_get_gist_returns_exact_json() {
        let factory = FakeFactory::new(FakeClient::responding(
            200,
            r#"{"id":"42","description":"demo"}"#,
        ));

        let outcome = run(&factory, json!({"gist_id": "42"})).await;
        match &outcome {
            ToolOutcome::Success(payload) => {
                assert_eq!(payload, r#"{"id":"42","description":"demo"}"#);
                let decoded: Gist = serde_json::from_str(payload).unwrap();
                assert_eq!(&serde_json::to_string(&decoded).unwrap(), payload);
            }
            other => panic!("expected success, got {:?}", other),
        }

        let fake = factory.fake();
        assert_eq!(fake.calls(), vec![RecordedCall::Get("42".to_string())]);
        assert!(fake.body_drained());
        assert!(fake.body_closed());
    }

    #[tokio::test]
    async fn test_missing_gist_id_makes_no_call() {
        let factory = FakeFactory::new(FakeClient::responding(200, "{}"));

        let outcome = run(&factory, json!({})).await;
        match outcome {
            ToolOutcome::Rejected(err) => {
                assert_eq!(err.to_string(), "missing required parameter: gist_id")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(factory.acquisitions(), 0);
        assert_eq!(factory.fake().call_count(), 0);
    }

    #[tokio::test]
    async fn test_numeric_gist_id_is_rejected() {
        let factory = FakeFactory::new(FakeClient::responding(200, "{}"));

        let outcome = run(&factory, json!({"gist_id": 42})).await;
        assert_eq!(
            outcome.text().as_deref(),
            Some("parameter gist_id is not of type string")
        );
        assert_eq!(factory.fake().call_count(), 0);
    }

    #[tokio::test]
    async fn test_error_status_passes_body_through() {
        let factory = FakeFactory::new(FakeClient::responding(403, "rate limited"));

        let outcome = run(&factory, json!({"gist_id": "42"})).await;
        assert!(matches!(outcome, ToolOutcome::Rejected(_)));
        assert_eq!(
            outcome.text().as_deref(),
            Some("failed to get gist: rate limited")
        );
        assert!(factory.fake().body_drained());
        assert!(factory.fake().body_closed());
    }

    #[tokio::test]
    async fn test_factory_failure_is_fatal() {
        let factory = FakeFactory::failing("token expired");

        let outcome = run(&factory, json!({"gist_id": "42"})).await;
        match outcome {
            ToolOutcome::Failed(err) => {
                assert_eq!(err.to_string(), "failed to get GitHub client: token expired")
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(factory.acquisitions(), 1);
        assert_eq!(factory.fake().call_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_is_fatal() {
        let factory = FakeFactory::new(FakeClient::failing("connection refused"));

        let outcome = run(&factory, json!({"gist_id": "42"})).await;
        match outcome {
            ToolOutcome::Failed(err) => {
                assert_eq!(err.to_string(), "failed to get gist: connection refused")
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(factory.fake().call_count(), 1);
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = GetGistTool::to_tool(&Translations::new());
        assert_eq!(tool.name, "get_gist");
        assert_eq!(
            tool.description.as_deref(),
            Some("Get details of a specific gist in GitHub.")
        );
        let annotations = tool.annotations.unwrap();
        assert_eq!(annotations.title.as_deref(), Some("Get gist details"));
        assert_eq!(annotations.read_only_hint, Some(true));

        let required = tool.input_schema.get("required").unwrap();
        assert_eq!(required, &json!(["gist_id"]));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_get_gist_http_handler() {
        let factory: Arc<dyn ClientFactory> =
            Arc::new(FakeFactory::new(FakeClient::responding(200, r#"{"id":"7"}"#)));

        let value = GetGistTool::http_handler(json!({"gist_id": "7"}), factory)
            .await
            .unwrap();
        assert_eq!(value["isError"], json!(false));
        assert_eq!(value["content"][0]["text"], json!(r#"{"id":"7"}"#));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_get_gist_http_handler_missing_param() {
        let factory: Arc<dyn ClientFactory> = Arc::new(FakeFactory::new(FakeClient::responding(200, "{}")));

        let value = GetGistTool::http_handler(json!({}), factory).await.unwrap();
        assert_eq!(value["isError"], json!(true));
    }
}
