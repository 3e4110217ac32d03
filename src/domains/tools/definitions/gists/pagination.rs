//! Page parameters shared by the list tools.
//!
//! The schema advertises GitHub's bounds (`page` >= 1, `perPage` in 1..=100)
//! but values are forwarded as `page` / `per_page` without checking them;
//! GitHub applies its own defaults and limits.

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::ToolError;
use crate::github::ListOptions;

/// Pagination parameters accepted by list tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct PaginationParams {
    /// Page number for pagination (min 1)
    #[serde(default)]
    #[schemars(range(min = 1))]
    pub page: Option<u32>,

    /// Results per page for pagination (min 1, max 100)
    #[serde(default, rename = "perPage")]
    #[schemars(range(min = 1, max = 100))]
    pub per_page: Option<u32>,
}

impl PaginationParams {
    /// Read `page` and `perPage` from tool arguments. Other keys are ignored.
    pub fn from_arguments(arguments: &JsonObject) -> Result<Self, ToolError> {
        serde_json::from_value(serde_json::Value::Object(arguments.clone()))
            .map_err(|e| ToolError::validation(format!("invalid pagination parameters: {e}")))
    }
}

impl From<PaginationParams> for ListOptions {
    fn from(params: PaginationParams) -> Self {
        Self {
            page: params.page,
            per_page: params.per_page,
        }
    }
}
