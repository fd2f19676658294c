//! Integration tests for tool and resource dispatch
//!
//! Exercises the public handler API the way the JSON-RPC server drives it.

use chrono::{DateTime, Utc};
use simple_mcp::error::ServerError;
use simple_mcp::mcp::{ResourceHandler, ToolHandler};
use simple_mcp::ServerConfig;
use std::sync::Arc;

fn resource_handler(config: ServerConfig) -> ResourceHandler {
    ResourceHandler::new(Arc::new(config))
}

#[test]
fn test_list_tools_is_stable() {
    let handler = ToolHandler::new();

    let first = handler.list_tools();
    let second = handler.list_tools();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    let names: Vec<_> = first.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["get_current_time", "echo_message"]);
    for tool in &first {
        assert_eq!(tool.input_schema["type"], "object");
    }
}

#[test]
fn test_list_resources_is_stable() {
    let handler = resource_handler(ServerConfig::default());

    let resources = handler.list_resources();
    assert_eq!(resources, handler.list_resources());
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].uri, "simple://greeting");
}

#[tokio::test]
async fn test_greeting_with_sample_env() {
    let handler = resource_handler(ServerConfig::with_sample_env("hello"));

    let content = handler.read("simple://greeting").await.unwrap();

    assert!(content.contents[0].text.contains("SAMPLE_ENV: hello"));
}

#[tokio::test]
async fn test_greeting_without_sample_env() {
    let handler = resource_handler(ServerConfig::default());

    let result = handler.read("simple://greeting").await;

    match result {
        Err(ServerError::Configuration(msg)) => {
            assert!(msg.contains("SAMPLE_ENV not set"), "got: {}", msg);
        }
        other => panic!("Expected Configuration error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_resource_regardless_of_env() {
    for config in [ServerConfig::default(), ServerConfig::with_sample_env("hello")] {
        let result = resource_handler(config).read("simple://unknown").await;
        assert!(matches!(result, Err(ServerError::ResourceNotFound(_))));
    }
}

#[tokio::test]
async fn test_echo_and_fallback() {
    let handler = ToolHandler::new();

    let echoed = handler
        .execute("echo_message", serde_json::json!({ "message": "ping" }))
        .await
        .unwrap();
    assert!(echoed.content[0].text.ends_with("ping"));

    let fallback = handler
        .execute("echo_message", serde_json::json!({}))
        .await
        .unwrap();
    assert!(fallback.content[0].text.contains("no message provided"));
}

#[tokio::test]
async fn test_current_time_is_close_to_now() {
    let result = ToolHandler::new()
        .execute("get_current_time", serde_json::json!({}))
        .await
        .unwrap();

    let text = &result.content[0].text;
    let stamp = text.trim_start_matches("current time: ");
    let parsed = DateTime::parse_from_rfc3339(stamp)
        .unwrap_or_else(|e| panic!("not an ISO-8601 timestamp: {} ({})", stamp, e));

    let drift = Utc::now().signed_duration_since(parsed.with_timezone(&Utc));
    assert!(drift.num_seconds().abs() < 5, "timestamp drifted: {}", drift);
}

#[tokio::test]
async fn test_unknown_tool() {
    let result = ToolHandler::new()
        .execute("nonexistent_tool", serde_json::json!({}))
        .await;

    assert!(matches!(result, Err(ServerError::UnknownTool(_))));
}
