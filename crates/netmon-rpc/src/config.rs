//! Client configuration
//!
//! Loads and validates API client settings from TOML files, with
//! environment overrides for the endpoint and credentials.
//!
//! ```toml
//! [server]
//! url = "https://monitor.example.net/api_jsonrpc.php"
//! timeout_secs = 10
//! user = "api"
//! password = "secret"
//! ```

use crate::error::{Result, RpcError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding `server.url`.
pub const ENV_URL: &str = "NETMON_URL";
/// Environment variable overriding `server.user`.
pub const ENV_USER: &str = "NETMON_USER";
/// Environment variable overriding `server.password`.
pub const ENV_PASSWORD: &str = "NETMON_PASSWORD";

/// API endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// JSON-RPC endpoint URL
    #[serde(default = "default_url")]
    pub url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Login user
    #[serde(default)]
    pub user: Option<String>,

    /// Login password
    #[serde(default)]
    pub password: Option<String>,
}

/// Complete client configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Endpoint configuration
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_url() -> String {
    "http://127.0.0.1/api_jsonrpc.php".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout(),
            user: None,
            password: None,
        }
    }
}

impl ServerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the login pair when both halves are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.user, &self.password) {
            (Some(user), Some(password)) => Some((user.as_str(), password.as_str())),
            _ => None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: ClientConfig = toml::from_str(contents)
            .map_err(|e| RpcError::config("file", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let server = &self.server;
        if !(server.url.starts_with("http://") || server.url.starts_with("https://")) {
            return Err(RpcError::config(
                "server.url",
                format!("'{}' is not an http(s) URL", server.url),
            ));
        }
        if server.timeout_secs == 0 {
            return Err(RpcError::config("server.timeout_secs", "must be > 0"));
        }
        if server.user.is_some() != server.password.is_some() {
            return Err(RpcError::config(
                "server.user",
                "user and password must be set together",
            ));
        }
        Ok(())
    }

    /// Apply `NETMON_*` environment overrides, then re-validate.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_URL) {
            self.server.url = url;
        }
        if let Some(user) = lookup(ENV_USER) {
            self.server.user = Some(user);
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            self.server.password = Some(password);
        }
        self.validate()
    }
}
