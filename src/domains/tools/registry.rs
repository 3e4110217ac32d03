//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::Translations;
use super::definitions::{GetGistTool, ListGistsTool, ListStarredGistsTool};
use crate::github::ClientFactory;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    factory: Arc<dyn ClientFactory>,
    translations: Arc<Translations>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(factory: Arc<dyn ClientFactory>, translations: Arc<Translations>) -> Self {
        Self {
            factory,
            translations,
        }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetGistTool::NAME,
            ListGistsTool::NAME,
            ListStarredGistsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        let t = self.translations.as_ref();
        vec![
            GetGistTool::to_tool(t),
            ListGistsTool::to_tool(t),
            ListStarredGistsTool::to_tool(t),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let factory = self.factory.clone();
        match name {
            GetGistTool::NAME => GetGistTool::http_handler(arguments, factory).await,
            ListGistsTool::NAME => ListGistsTool::http_handler(arguments, factory).await,
            ListStarredGistsTool::NAME => {
                ListStarredGistsTool::http_handler(arguments, factory).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(super::ToolError::not_found(name).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::testing::{FakeClient, FakeFactory};

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(
            Arc::new(FakeFactory::new(FakeClient::responding(200, "[]"))),
            Arc::new(Translations::new()),
        )
    }

    #[test]
    fn test_registry_tool_names() {
        let names = test_registry().tool_names();
        assert_eq!(names, vec!["get_gist", "list_gists", "list_starred_gists"]);
    }

    #[test]
    fn test_registry_tools_are_read_only() {
        let tools = test_registry().get_all_tools();
        assert_eq!(tools.len(), 3);
        for tool in tools {
            let annotations = tool.annotations.expect("annotations");
            assert_eq!(annotations.read_only_hint, Some(true), "{}", tool.name);
        }
    }

    #[test]
    fn test_registry_uses_translations() {
        let translations = Translations::with_overrides(
            [(
                "TOOL_LIST_GISTS_DESCRIPTION".to_string(),
                "Mes gists".to_string(),
            )]
            .into(),
        );
        let registry = ToolRegistry::new(
            Arc::new(FakeFactory::new(FakeClient::responding(200, "[]"))),
            Arc::new(translations),
        );
        let tools = registry.get_all_tools();
        let list = tools.iter().find(|t| t.name == "list_gists").unwrap();
        assert_eq!(list.description.as_deref(), Some("Mes gists"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_list() {
        let registry = test_registry();
        let result = tokio_test::block_on(registry.call_tool("list_gists", serde_json::json!({})));
        let value = result.unwrap();
        assert_eq!(value["isError"], serde_json::json!(false));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = test_registry();
        let result = tokio_test::block_on(registry.call_tool("unknown", serde_json::json!({})));
        assert_eq!(result.unwrap_err(), "Tool not found: unknown");
    }
}
