//! Simple MCP Server - entry point
//!
//! Validates the environment, then serves MCP over stdin/stdout.
//! stdout carries protocol traffic only; all logs go to stderr.

use simple_mcp::{McpServer, ResourceHandler, Result, ServerConfig, ServerError, ToolHandler};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{self, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "simple_mcp=info,simple_mcp_server=info";

fn init_mcp_server() -> Result<McpServer> {
    let config = ServerConfig::from_env()?;
    config.require_sample_env()?;

    info!("Starting simple MCP server...");

    Ok(McpServer::new(
        ToolHandler::new(),
        ResourceHandler::new(Arc::new(config)),
    ))
}

async fn serve(server: McpServer) -> Result<()> {
    // Run server with graceful shutdown on signals
    tokio::select! {
        result = server.run() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal, stopping MCP server gracefully...");
        }
    }

    Ok(())
}

/// Report a fatal error on stderr regardless of the log filter, then exit 1
fn exit_with(context: &str, err: ServerError) -> ! {
    eprintln!("{}: {}", context, err);
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Write logs to stderr, not stdout
        .init();

    debug!("simple-mcp-server v{} starting...", env!("CARGO_PKG_VERSION"));

    let server = match init_mcp_server() {
        Ok(server) => server,
        Err(e) => exit_with("Server initialization error", e),
    };

    if let Err(e) = serve(server).await {
        exit_with("Server error", e);
    }
}
