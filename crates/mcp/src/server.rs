// MCP server: JSON-RPC 2.0 over newline-delimited stdio

use crate::codec::{Frame, JsonLineCodec, DEFAULT_MAX_LINE_LENGTH};
use crate::protocol::{
    CallToolParams, InitializeParams, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
    DEFAULT_PROTOCOL_VERSION,
};
use crate::tools::ToolRegistry;
use anyhow::{Context, Result};
use futures::{SinkExt, StreamExt};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};
use tracing::{debug, info, warn};

/// Name reported to clients during `initialize`.
pub const SERVER_NAME: &str = "rent-a-soul-bridge";

pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    pub async fn start(self: Arc<Self>) -> Result<()> {
        let mut stdout = tokio::io::stdout();
        self.serve(tokio::io::stdin(), &mut stdout).await
    }

    /// Serve one message per line from `reader`, replying on `writer`.
    ///
    /// Each request is handled on its own task, so a slow marketplace call
    /// does not hold up later requests. Responses are written in completion
    /// order by a single writer. Returns once input is exhausted and every
    /// in-flight request has been answered.
    pub async fn serve<R, W>(self: Arc<Self>, reader: R, writer: &mut W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

        info!(tools = self.registry.list_schemas().len(), "MCP server listening on stdio");

        let read_loop = async move {
            let mut frames = FramedRead::new(reader, JsonLineCodec::new());

            while let Some(frame) = frames.next().await {
                match frame.context("Failed to read from stdin")? {
                    Frame::Line(line) if line.trim().is_empty() => {}
                    Frame::Line(line) => {
                        let server = Arc::clone(&self);
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            if let Some(response) = server.handle_line(&line).await {
                                // Receiver is gone only if the writer already failed.
                                let _ = tx.send(response);
                            }
                        });
                    }
                    Frame::NotUtf8 => {
                        warn!("Message is not valid UTF-8");
                        let _ = tx.send(parse_error());
                    }
                    Frame::TooLong => {
                        warn!(max_bytes = DEFAULT_MAX_LINE_LENGTH, "Message too long, discarded");
                        let _ = tx.send(parse_error());
                    }
                }
            }

            info!("stdin closed, finishing in-flight requests");
            Ok::<_, anyhow::Error>(())
        };

        let write_loop = async {
            let mut sink = FramedWrite::new(writer, LinesCodec::new());
            while let Some(response) = rx.recv().await {
                let encoded =
                    serde_json::to_string(&response).context("Failed to encode response")?;
                sink.send(encoded).await.context("Failed to write to stdout")?;
            }
            Ok::<_, anyhow::Error>(())
        };

        tokio::try_join!(read_loop, write_loop)?;
        Ok(())
    }

    /// Handle one raw message. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Unparsable message");
                return Some(parse_error());
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(_) => return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request())),
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request()));
        }

        self.handle_request(request).await
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id.clone() else {
            debug!(method = %request.method, "Notification received");
            return None;
        };

        let outcome = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => to_result(&ListToolsResult {
                tools: self.registry.list_schemas(),
            }),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(JsonRpcError::method_not_found(other)),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: InitializeParams = match params {
            Some(params) => serde_json::from_value(params)
                .map_err(|e| JsonRpcError::invalid_params(e.to_string()))?,
            None => InitializeParams::default(),
        };

        if let Some(client) = &params.client_info {
            info!(client = %client.name, version = %client.version, "Client connected");
        }

        to_result(&InitializeResult {
            protocol_version: params
                .protocol_version
                .unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_string()),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("Missing params for tools/call"))
            .and_then(|p| {
                serde_json::from_value(p).map_err(|e| JsonRpcError::invalid_params(e.to_string()))
            })?;

        info!(tool = %params.name, "Tool call");
        let result = self.registry.call(&params.name, params.arguments).await;
        to_result(&result)
    }
}

fn parse_error() -> JsonRpcResponse {
    JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error())
}

fn to_result<T: Serialize>(value: &T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}
