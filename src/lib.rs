//! Simple MCP Server
//!
//! A minimal Model Context Protocol server speaking JSON-RPC 2.0 over stdio:
//! - `get_current_time` tool: current UTC time in ISO-8601
//! - `echo_message` tool: echoes the caller's message
//! - `simple://greeting` resource: a greeting that embeds `SAMPLE_ENV`
//!
//! # Example
//!
//! ```ignore
//! use simple_mcp::{McpServer, ResourceHandler, ServerConfig, ToolHandler};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> simple_mcp::Result<()> {
//!     let config = Arc::new(ServerConfig::from_env()?);
//!     config.require_sample_env()?;
//!
//!     let server = McpServer::new(ToolHandler::new(), ResourceHandler::new(config));
//!     server.run().await
//! }
//! ```

pub mod config;
pub mod error;
pub mod mcp;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use mcp::{McpServer, ResourceHandler, ToolHandler};
