// Standalone MCP server binary

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use soulmarket_mcp::{BridgeArgs, McpServer, ToolRegistry};
use soulmarket_sdk::MarketClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries protocol messages only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = BridgeArgs::parse();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Rent-a-Soul bridge starting against {}", config.base_url);

    let client = MarketClient::from_config(config)?;
    let registry = ToolRegistry::marketplace(client);

    tracing::info!("Registered {} tools", registry.list_schemas().len());

    let server = Arc::new(McpServer::new(registry));
    server.start().await?;

    Ok(())
}
