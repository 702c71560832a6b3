pub mod hire;
pub mod market;
pub mod tasks;
mod registry;

pub use hire::HireSoulTool;
pub use market::{GetSoulStatusTool, SearchMarketTool, EMPTY_MARKET_MESSAGE};
pub use registry::{
    json_schema_array, json_schema_number, json_schema_object, json_schema_string, Tool,
    ToolRegistry,
};
pub use tasks::ListTaskTool;

use crate::protocol::CallToolResult;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use soulmarket_sdk::{MarketClient, MarketError};
use std::sync::Arc;

impl ToolRegistry {
    /// Registry holding every marketplace tool, in catalog order.
    pub fn marketplace(client: MarketClient) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(GetSoulStatusTool::new(client.clone())));
        registry.register(Arc::new(SearchMarketTool::new(client.clone())));
        registry.register(Arc::new(ListTaskTool::new(client.clone())));
        registry.register(Arc::new(HireSoulTool::new(client)));
        registry
    }
}

/// Error envelope for a failed marketplace call.
pub(crate) fn api_error(error: &MarketError) -> CallToolResult {
    CallToolResult::error(format!("API Error: {}", error.describe()))
}

/// Deserialize tool arguments into their typed shape.
pub(crate) fn parse_args<T: DeserializeOwned>(tool: &str, arguments: serde_json::Value) -> Result<T> {
    serde_json::from_value(arguments).with_context(|| format!("Invalid arguments for {}", tool))
}

/// Pretty JSON fallback for responses without a dedicated rendering.
pub(crate) fn render_raw<T: serde::Serialize>(body: &T) -> Result<String> {
    serde_json::to_string_pretty(body).context("Failed to render marketplace response")
}
