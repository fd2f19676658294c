//! MCP tool implementations
//!
//! Two fixed tools are exposed:
//! - `get_current_time`: report the wall clock in ISO-8601 (UTC)
//! - `echo_message`: echo the caller's message back
//!
//! Arguments are deserialised into a typed struct per tool before dispatch.
//! Malformed arguments are rejected with [`ServerError::InvalidParams`].

use super::protocol::TextContent;
use crate::error::{Result, ServerError};
use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Substituted when `echo_message` is called without a message
pub const NO_MESSAGE_PLACEHOLDER: &str = "no message provided";

/// Tool schema definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Tool name (e.g., "echo_message")
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// JSON Schema for input parameters
    pub input_schema: Value,
}

/// Result of a tool call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<TextContent>,
}

impl ToolResult {
    fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![TextContent::new(text)],
        }
    }
}

/// The closed set of tools this server knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    GetCurrentTime,
    EchoMessage,
}

impl ToolName {
    /// All tools, in listing order
    pub const ALL: [ToolName; 2] = [ToolName::GetCurrentTime, ToolName::EchoMessage];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::GetCurrentTime => "get_current_time",
            ToolName::EchoMessage => "echo_message",
        }
    }

    fn descriptor(self) -> Tool {
        match self {
            ToolName::GetCurrentTime => Tool {
                name: self.as_str().to_string(),
                description: "Get the current time".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {},
                    "required": []
                }),
            },
            ToolName::EchoMessage => Tool {
                name: self.as_str().to_string(),
                description: "Return the given message as-is".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "message": {
                            "type": "string",
                            "description": "Message to echo"
                        }
                    },
                    "required": ["message"]
                }),
            },
        }
    }
}

impl FromStr for ToolName {
    type Err = ServerError;

    fn from_str(name: &str) -> Result<Self> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| ServerError::UnknownTool(name.to_string()))
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments for `get_current_time` (any object is accepted and ignored)
#[derive(Debug, Default, Deserialize)]
struct GetCurrentTimeArgs {}

/// Arguments for `echo_message`
#[derive(Debug, Default, Deserialize)]
struct EchoMessageArgs {
    #[serde(default)]
    message: Option<String>,
}

/// Tool handler that dispatches to the appropriate implementation
#[derive(Debug, Clone, Default)]
pub struct ToolHandler;

impl ToolHandler {
    /// Create a new tool handler
    pub fn new() -> Self {
        Self
    }

    /// Get list of all available tools
    pub fn list_tools(&self) -> Vec<Tool> {
        ToolName::ALL.into_iter().map(ToolName::descriptor).collect()
    }

    /// Execute a tool call
    pub async fn execute(&self, tool_name: &str, params: Value) -> Result<ToolResult> {
        debug!("Executing tool: {}", tool_name);

        let tool = tool_name.parse::<ToolName>().map_err(|e| {
            warn!("Unknown tool: {}", tool_name);
            e
        })?;

        match tool {
            ToolName::GetCurrentTime => {
                let _args: GetCurrentTimeArgs = parse_args(tool, params)?;
                Ok(self.get_current_time())
            }
            ToolName::EchoMessage => {
                let args: EchoMessageArgs = parse_args(tool, params)?;
                Ok(self.echo_message(args))
            }
        }
    }

    fn get_current_time(&self) -> ToolResult {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        ToolResult::text(format!("current time: {}", now))
    }

    fn echo_message(&self, args: EchoMessageArgs) -> ToolResult {
        let message = args
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| NO_MESSAGE_PLACEHOLDER.to_string());
        ToolResult::text(format!("your message: {}", message))
    }
}

/// Deserialize tool arguments, treating a missing/null payload as `{}`
fn parse_args<T: DeserializeOwned + Default>(tool: ToolName, params: Value) -> Result<T> {
    match params {
        Value::Null => Ok(T::default()),
        Value::Object(_) => serde_json::from_value(params)
            .map_err(|e| ServerError::InvalidParams(format!("{}: {}", tool, e))),
        other => Err(ServerError::InvalidParams(format!(
            "{}: arguments must be an object, got {}",
            tool, other
        ))),
    }
}
