// Market tools: connectivity status and soul search

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{api_error, json_schema_object, render_raw, Tool};
use anyhow::Result;
use soulmarket_sdk::{MarketClient, MarketListing, SoulProfile, StatusResponse};

/// Text returned when the market lists no souls.
pub const EMPTY_MARKET_MESSAGE: &str =
    "The market is empty: no souls are available for hire right now.";

/// Tool to check connectivity with the marketplace
pub struct GetSoulStatusTool {
    client: MarketClient,
}

impl GetSoulStatusTool {
    pub fn new(client: MarketClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetSoulStatusTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_soul_status".to_string(),
            description: "Check the connection to the human marketplace and report its status."
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.status().check().await {
            Ok(status) => Ok(CallToolResult::text(render_status(&status))),
            Err(e) => Ok(api_error(&e)),
        }
    }
}

fn render_status(status: &StatusResponse) -> String {
    format!(
        "Marketplace is online. Status: {}, version: {}",
        status.status.as_deref().unwrap_or("unknown"),
        status.version.as_deref().unwrap_or("unknown")
    )
}

/// Tool to list souls available for hire
pub struct SearchMarketTool {
    client: MarketClient,
}

impl SearchMarketTool {
    pub fn new(client: MarketClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for SearchMarketTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_market".to_string(),
            description: "Get a list of available human souls (workers).".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.market().list().await {
            Ok(listing) => Ok(CallToolResult::text(render_listing(&listing)?)),
            Err(e) => Ok(api_error(&e)),
        }
    }
}

fn render_listing(listing: &MarketListing) -> Result<String> {
    if let MarketListing::Other(raw) = listing {
        return render_raw(raw);
    }

    let souls = listing.souls();
    if souls.is_empty() {
        return Ok(EMPTY_MARKET_MESSAGE.to_string());
    }

    let mut output = format!("Found {} soul(s) available for hire:", souls.len());
    for soul in souls {
        output.push('\n');
        output.push_str(&render_soul(soul));
    }
    Ok(output)
}

fn render_soul(soul: &SoulProfile) -> String {
    let mut line = format!("- {}", soul.name.as_deref().unwrap_or("Unnamed soul"));
    if let Some(id) = &soul.id {
        line.push_str(&format!(" [{}]", id));
    }
    if let Some(headline) = &soul.headline {
        line.push_str(&format!(": {}", headline));
    }
    match &soul.rate {
        Some(serde_json::Value::Number(n)) => line.push_str(&format!(" (${}/hr)", n)),
        Some(serde_json::Value::String(s)) => line.push_str(&format!(" ({})", s)),
        _ => {}
    }
    line
}
