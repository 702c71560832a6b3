// Hire tool: opens a handshake with a specific soul

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{api_error, json_schema_object, json_schema_string, parse_args, render_raw, Tool};
use anyhow::Result;
use soulmarket_sdk::{HireRequest, MarketClient};

pub struct HireSoulTool {
    client: MarketClient,
}

impl HireSoulTool {
    pub fn new(client: MarketClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for HireSoulTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "hire_soul".to_string(),
            description: "Start a hire handshake with a specific soul from the market.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "target_soul_id": json_schema_string("ID of the soul to hire, as listed by search_market"),
                    "notes": json_schema_string("Optional message for the soul")
                }),
                vec!["target_soul_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let request: HireRequest = parse_args("hire_soul", arguments)?;

        match self.client.hire().create(&request).await {
            Ok(response) => {
                let text = match &response.handshake_id {
                    Some(id) => format!("Hire handshake initiated. Handshake ID: {}", id),
                    None => render_raw(&response)?,
                };
                Ok(CallToolResult::text(text))
            }
            Err(e) => Ok(api_error(&e)),
        }
    }
}
