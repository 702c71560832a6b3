// MCP (Model Context Protocol) bridge to the Rent-a-Soul marketplace.
// Serves marketplace tools to agent clients over JSON-RPC on stdio.

pub mod codec;
pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::{BridgeArgs, ConfigError};
pub use server::McpServer;
pub use tools::ToolRegistry;
