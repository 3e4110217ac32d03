//! Shared plumbing for the gist tools.
//!
//! Each invocation runs the same linear sequence: acquire a client, make
//! one call, read the body, classify the status and encode the payload.

use std::future::Future;
use std::sync::Arc;

use reqwest::StatusCode;
use rmcp::model::{JsonObject, ToolAnnotations};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::domains::tools::{ToolError, ToolOutcome};
use crate::github::{
    ApiResponse, ClientError, ClientFactory, Gist, GistClient, GistScope, ListOptions,
};

/// Extract a required, non-empty string argument.
pub fn required_str(arguments: &JsonObject, name: &str) -> Result<String, ToolError> {
    match arguments.get(name) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        None | Some(Value::Null) | Some(Value::String(_)) => Err(ToolError::validation(format!(
            "missing required parameter: {name}"
        ))),
        Some(_) => Err(ToolError::validation(format!(
            "parameter {name} is not of type string"
        ))),
    }
}

/// Turn raw HTTP-transport arguments into an argument object.
#[cfg(feature = "http")]
pub fn arguments_object(arguments: Value) -> JsonObject {
    match arguments {
        Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}

/// Annotations shared by every gist tool: none of them modify anything.
pub fn read_only_annotations(title: String) -> ToolAnnotations {
    ToolAnnotations {
        title: Some(title),
        read_only_hint: Some(true),
        destructive_hint: None,
        idempotent_hint: None,
        open_world_hint: None,
    }
}

/// Run one GitHub call and encode the decoded payload as JSON text.
///
/// `action` names the call in error messages ("get gist"), `subject` names
/// the payload ("gist"). The response body is read on every branch and
/// released before this returns.
pub async fn fetch<T, F, Fut>(
    factory: &dyn ClientFactory,
    ct: &CancellationToken,
    action: &'static str,
    subject: &'static str,
    call: F,
) -> Result<String, ToolError>
where
    T: DeserializeOwned + Serialize,
    F: FnOnce(Arc<dyn GistClient>) -> Fut,
    Fut: Future<Output = Result<ApiResponse, ClientError>>,
{
    let client = factory
        .client()
        .await
        .map_err(ToolError::ClientUnavailable)?;

    let response = tokio::select! {
        biased;
        _ = ct.cancelled() => return Err(ToolError::Cancelled { action }),
        response = call(client) => response.map_err(|source| ToolError::Transport { action, source })?,
    };

    let status = response.status();
    let body = tokio::select! {
        biased;
        _ = ct.cancelled() => return Err(ToolError::Cancelled { action }),
        body = response.into_bytes() => body.map_err(ToolError::ReadBody)?,
    };
    debug!("{} returned {} ({} bytes)", action, status, body.len());

    if status != StatusCode::OK {
        return Err(ToolError::RemoteApi {
            action,
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    let value: T = serde_json::from_slice(&body).map_err(|e| ToolError::Transport {
        action,
        source: ClientError::Decode(e),
    })?;
    let payload =
        serde_json::to_string(&value).map_err(|source| ToolError::Encoding { subject, source })?;

    info!("{} succeeded", action);
    Ok(payload)
}

/// List gists in `scope`. Both list tools go through here.
pub async fn list_in_scope(
    factory: &dyn ClientFactory,
    ct: &CancellationToken,
    scope: GistScope,
    options: ListOptions,
) -> ToolOutcome {
    let (action, subject) = match scope {
        GistScope::All => ("list gists", "gists"),
        GistScope::Starred => ("list starred gists", "starred gists"),
    };

    fetch::<Vec<Gist>, _, _>(factory, ct, action, subject, move |client| async move {
        client.list_gists(scope, options).await
    })
    .await
    .into()
}
