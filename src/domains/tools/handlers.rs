//! Tool invocation results.
//!
//! Every tool call ends in exactly one [`ToolOutcome`]. The variant decides
//! how the host sees it: a success payload, an error the user gets to read,
//! or a failure of the call itself.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use tracing::{error, warn};

use super::ToolError;

/// Result of one tool invocation.
#[derive(Debug)]
pub enum ToolOutcome {
    /// JSON text of the remote object(s).
    Success(String),

    /// Recoverable error reported to the user as tool output.
    Rejected(ToolError),

    /// Hard error that aborts the invocation.
    Failed(ToolError),
}

impl From<ToolError> for ToolOutcome {
    fn from(err: ToolError) -> Self {
        if err.is_recoverable() {
            Self::Rejected(err)
        } else {
            Self::Failed(err)
        }
    }
}

impl From<Result<String, ToolError>> for ToolOutcome {
    fn from(result: Result<String, ToolError>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(err) => err.into(),
        }
    }
}

impl ToolOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Text shown to the user, if the outcome has any.
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Success(payload) => Some(payload.clone()),
            Self::Rejected(err) => Some(err.to_string()),
            Self::Failed(_) => None,
        }
    }

    /// Convert to what rmcp expects from a tool route.
    pub fn into_call_result(self) -> Result<CallToolResult, McpError> {
        match self {
            Self::Success(payload) => Ok(CallToolResult::success(vec![Content::text(payload)])),
            Self::Rejected(err) => {
                warn!("{}", err);
                Ok(CallToolResult::error(vec![Content::text(err.to_string())]))
            }
            Self::Failed(err) => {
                error!("{}", err);
                Err(McpError::internal_error(err.to_string(), None))
            }
        }
    }

    /// Convert to a JSON-RPC `tools/call` result for the HTTP transport.
    #[cfg(feature = "http")]
    pub fn into_http_value(self) -> Result<serde_json::Value, String> {
        let result = self.into_call_result().map_err(|e| e.message.to_string())?;
        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }
}
