//! MCP server with stdio transport
//!
//! Implements a JSON-RPC 2.0 server that reads newline-delimited requests
//! and writes one response line per request. Notifications get no reply.

use super::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION};
use super::resources::ResourceHandler;
use super::tools::ToolHandler;
use crate::error::{Result, ServerError};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

/// Name reported in `serverInfo`
pub const SERVER_NAME: &str = "simple-mcp-server";

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

#[derive(Debug, Deserialize)]
struct ReadResourceParams {
    uri: String,
}

/// MCP server that handles JSON-RPC requests over stdio
pub struct McpServer {
    tool_handler: ToolHandler,
    resource_handler: ResourceHandler,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(tool_handler: ToolHandler, resource_handler: ResourceHandler) -> Self {
        Self {
            tool_handler,
            resource_handler,
        }
    }

    /// Run the server on stdin/stdout until EOF
    pub async fn run(&self) -> Result<()> {
        info!("MCP server started, listening on stdin...");

        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await?;

        info!("MCP server shutting down");
        Ok(())
    }

    /// Serve newline-delimited JSON-RPC from `reader`, answering on `writer`
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            buf.clear();

            let read = reader.read_until(b'\n', &mut buf).await.map_err(|e| {
                error!("Failed to read request: {}", e);
                e
            })?;
            if read == 0 {
                debug!("Received EOF, shutting down");
                return Ok(());
            }

            // Invalid UTF-8 is replaced, not fatal; the JSON parser judges the rest.
            let line = String::from_utf8_lossy(&buf);
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            debug!("Received request: {}", trimmed);

            let Some(response) = self.process_request(trimmed).await else {
                continue;
            };

            let response_json = serde_json::to_string(&response)?;
            debug!("Sending response: {}", response_json);

            write_line(&mut writer, &response_json).await.map_err(|e| {
                error!("Failed to write response: {}", e);
                e
            })?;
        }
    }

    /// Process a single JSON-RPC message; `None` means nothing is sent back
    pub async fn process_request(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    None,
                    JsonRpcError::parse_error(format!("Invalid JSON: {}", e)),
                ));
            }
        };

        let request: JsonRpcRequest = match serde_json::from_value(value.clone()) {
            Ok(req) => req,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    value.get("id").cloned(),
                    JsonRpcError::invalid_request(format!("Invalid request: {}", e)),
                ));
            }
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                request.id,
                JsonRpcError::invalid_request("jsonrpc must be '2.0'"),
            ));
        }

        let outcome = self.dispatch(&request).await;

        if request.is_notification() {
            if let Err(e) = outcome {
                warn!("Notification {} failed: {}", request.method, e);
            }
            return None;
        }

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(request.id, result),
            Err(e) => {
                debug!("Request {} failed: {}", request.method, e);
                JsonRpcResponse::error(request.id, JsonRpcError::from(&e))
            }
        })
    }

    /// Route a request to its handler
    async fn dispatch(&self, request: &JsonRpcRequest) -> Result<Value> {
        debug!("Handling {}", request.method);

        match request.method.as_str() {
            "initialize" => Ok(self.handle_initialize()),
            "ping" => Ok(serde_json::json!({})),
            method if method.starts_with("notifications/") => Ok(serde_json::json!({})),

            "tools/list" => Ok(serde_json::json!({
                "tools": self.tool_handler.list_tools()
            })),
            "tools/call" => {
                let params: CallToolParams = parse_params(&request.params, "tools/call")?;
                let result = self
                    .tool_handler
                    .execute(&params.name, params.arguments)
                    .await?;
                Ok(serde_json::to_value(result)?)
            }

            "resources/list" => Ok(serde_json::json!({
                "resources": self.resource_handler.list_resources()
            })),
            "resources/read" => {
                let params: ReadResourceParams =
                    parse_params(&request.params, "resources/read")?;
                let content = self.resource_handler.read(&params.uri).await?;
                Ok(serde_json::to_value(content)?)
            }

            method => Err(ServerError::MethodNotFound(method.to_string())),
        }
    }

    fn handle_initialize(&self) -> Value {
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            },
            "capabilities": {
                "resources": {},
                "tools": {}
            }
        })
    }
}

fn parse_params<T: DeserializeOwned>(params: &Value, method: &str) -> Result<T> {
    if !params.is_object() {
        return Err(ServerError::InvalidParams(format!(
            "{}: params must be an object",
            method
        )));
    }
    T::deserialize(params).map_err(|e| ServerError::InvalidParams(format!("{}: {}", method, e)))
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, line: &str) -> std::io::Result<()> {
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}
