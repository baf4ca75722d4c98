//! Environment-derived runtime configuration.
//!
//! Loaded once at startup and passed explicitly into the router; request
//! handlers never read process environment themselves.

use std::env;

use thiserror::Error;

/// Listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3001;
/// Allowed cross-origin caller when `FRONTEND_URL` is unset.
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
/// Runtime mode label when `NODE_ENV` is unset.
pub const DEFAULT_ENV_LABEL: &str = "development";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub frontend_url: String,
    pub env: RuntimeEnv,
}

/// Runtime mode label, carried verbatim from `NODE_ENV`.
///
/// Only the exact value `production` changes behavior (error redaction,
/// log format); every other label is opaque and merely echoed by `/health`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeEnv(String);

impl RuntimeEnv {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_production(&self) -> bool {
        self.0 == "production"
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a TCP port number, got {0:?}")]
    InvalidPort(String),
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            env::var("PORT").ok().as_deref(),
            env::var("FRONTEND_URL").ok().as_deref(),
            env::var("NODE_ENV").ok().as_deref(),
        )
    }

    /// Resolution core, kept free of environment reads so tests can drive it
    /// directly. Unset and empty values both fall back to the defaults.
    fn resolve(
        port: Option<&str>,
        frontend_url: Option<&str>,
        node_env: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let port = match non_empty(port) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
            None => DEFAULT_PORT,
        };

        let frontend_url = non_empty(frontend_url)
            .unwrap_or(DEFAULT_FRONTEND_URL)
            .to_string();

        let env = RuntimeEnv::new(non_empty(node_env).unwrap_or(DEFAULT_ENV_LABEL));

        Ok(Self {
            port,
            frontend_url,
            env,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
