//! Error types for the simple MCP server
//!
//! Structured errors are defined with thiserror. Per-request variants are
//! mapped to JSON-RPC error objects by the server.

use thiserror::Error;

/// Main error type for server operations
#[derive(Error, Debug)]
pub enum ServerError {
    /// A required setting is missing or empty
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No resource is registered under the requested URI
    #[error("unknown resource: {0}")]
    ResourceNotFound(String),

    /// No tool is registered under the requested name
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// JSON-RPC method is not handled by this server
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// Request or tool arguments did not match the expected shape
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Loading configuration sources failed
    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;
