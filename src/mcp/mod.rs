//! Model Context Protocol (MCP) server implementation
//!
//! Provides a JSON-RPC 2.0 server over stdio exposing two tools
//! (`get_current_time`, `echo_message`) and one resource (`simple://greeting`).

pub mod protocol;
pub mod resources;
pub mod server;
pub mod tools;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, TextContent};
pub use resources::{Resource, ResourceContent, ResourceHandler, ResourceUri};
pub use server::McpServer;
pub use tools::{Tool, ToolHandler, ToolName, ToolResult};
