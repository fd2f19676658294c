//! Server configuration
//!
//! The process environment is read once into a [`ServerConfig`] which is then
//! handed to the handlers that need it. Handlers never call `std::env`
//! directly, so tests can inject values without touching the real environment.

use crate::error::{Result, ServerError};
use serde::Deserialize;
use tracing::debug;

/// Name of the environment variable the greeting resource depends on
pub const SAMPLE_ENV_VAR: &str = "SAMPLE_ENV";

/// Configuration for the MCP server
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    /// Value of `SAMPLE_ENV`, if set
    #[serde(default)]
    pub sample_env: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the process environment
    ///
    /// Only `SAMPLE_ENV` is read; unrelated variables may hold arbitrary bytes.
    pub fn from_env() -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(raw) = std::env::var_os(SAMPLE_ENV_VAR) {
            let value = raw.into_string().map_err(|_| {
                ServerError::Configuration(format!(
                    "environment variable {} is not valid Unicode",
                    SAMPLE_ENV_VAR
                ))
            })?;
            builder = builder.set_override("sample_env", value)?;
        }

        let settings = builder.build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        debug!(
            "Loaded configuration ({} set: {})",
            SAMPLE_ENV_VAR,
            config.sample_env.is_some()
        );
        Ok(config)
    }

    /// Create a configuration with an explicit `SAMPLE_ENV` value
    pub fn with_sample_env(value: impl Into<String>) -> Self {
        Self {
            sample_env: Some(value.into()),
        }
    }

    /// Get `SAMPLE_ENV`, failing if it is absent or empty
    pub fn require_sample_env(&self) -> Result<&str> {
        match self.sample_env.as_deref() {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ServerError::Configuration(format!(
                "environment variable {} not set",
                SAMPLE_ENV_VAR
            ))),
        }
    }
}
