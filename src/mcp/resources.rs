//! MCP resource implementations
//!
//! A single static resource, `simple://greeting`, whose text embeds the
//! configured `SAMPLE_ENV` value.

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

const TEXT_PLAIN: &str = "text/plain";

/// Resource descriptor returned by `resources/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub uri: String,
    pub mime_type: String,
    pub name: String,
    pub description: String,
}

/// One entry of a `resources/read` result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceText {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
}

/// Result of `resources/read`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceContent {
    pub contents: Vec<ResourceText>,
}

/// The closed set of resources this server knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceUri {
    Greeting,
}

impl ResourceUri {
    pub const ALL: [ResourceUri; 1] = [ResourceUri::Greeting];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceUri::Greeting => "simple://greeting",
        }
    }

    /// Exact-match lookup; no prefix or wildcard resolution
    pub fn lookup(uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == uri)
    }

    fn descriptor(self) -> Resource {
        match self {
            ResourceUri::Greeting => Resource {
                uri: self.as_str().to_string(),
                mime_type: TEXT_PLAIN.to_string(),
                name: "Greeting".to_string(),
                description: "A simple greeting message".to_string(),
            },
        }
    }
}

/// Resource handler backed by the server configuration
#[derive(Debug, Clone)]
pub struct ResourceHandler {
    config: Arc<ServerConfig>,
}

impl ResourceHandler {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self { config }
    }

    /// Get list of all available resources
    pub fn list_resources(&self) -> Vec<Resource> {
        ResourceUri::ALL.into_iter().map(ResourceUri::descriptor).collect()
    }

    /// Read the content of a resource by URI
    pub async fn read(&self, uri: &str) -> Result<ResourceContent> {
        debug!("Reading resource: {}", uri);

        let resource = ResourceUri::lookup(uri).ok_or_else(|| {
            warn!("Unknown resource: {}", uri);
            ServerError::ResourceNotFound(uri.to_string())
        })?;

        match resource {
            ResourceUri::Greeting => {
                let sample_env = self.config.require_sample_env()?;
                Ok(ResourceContent {
                    contents: vec![ResourceText {
                        uri: uri.to_string(),
                        mime_type: TEXT_PLAIN.to_string(),
                        text: format!(
                            "Hello! Welcome to the simple MCP server.\nSAMPLE_ENV: {}",
                            sample_env
                        ),
                    }],
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler(sample_env: Option<&str>) -> ResourceHandler {
        let config = ServerConfig {
            sample_env: sample_env.map(str::to_string),
        };
        ResourceHandler::new(Arc::new(config))
    }

    #[test]
    fn test_list_resources() {
        let resources = handler(None).list_resources();

        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].uri, "simple://greeting");
        assert_eq!(resources[0].mime_type, "text/plain");
        assert_eq!(resources[0].name, "Greeting");
    }

    #[test]
    fn test_resource_serializes_mime_type_camel_case() {
        let value = serde_json::to_value(&handler(None).list_resources()[0]).unwrap();
        assert_eq!(value["mimeType"], "text/plain");
    }

    #[tokio::test]
    async fn test_read_greeting() {
        let content = handler(Some("hello")).read("simple://greeting").await.unwrap();

        assert_eq!(content.contents.len(), 1);
        let entry = &content.contents[0];
        assert_eq!(entry.uri, "simple://greeting");
        assert_eq!(entry.mime_type, "text/plain");
        assert!(entry.text.contains("SAMPLE_ENV: hello"));
    }

    #[tokio::test]
    async fn test_read_greeting_without_sample_env() {
        for sample_env in [None, Some("")] {
            let result = handler(sample_env).read("simple://greeting").await;
            assert!(matches!(result, Err(ServerError::Configuration(_))));
        }
    }

    #[tokio::test]
    async fn test_read_unknown_resource() {
        for sample_env in [None, Some("hello")] {
            let result = handler(sample_env).read("simple://unknown").await;
            match result {
                Err(ServerError::ResourceNotFound(uri)) => assert_eq!(uri, "simple://unknown"),
                other => panic!("Expected ResourceNotFound, got: {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_read_requires_exact_uri() {
        let handler = handler(Some("hello"));
        assert!(handler.read("simple://greeting/").await.is_err());
        assert!(handler.read("simple://").await.is_err());
    }
}
