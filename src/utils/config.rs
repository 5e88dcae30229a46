//! Layered configuration
//!
//! Sources, lowest priority first:
//! 1. built-in defaults
//! 2. a TOML file (`brave-search.toml` in the working directory, or `--config`)
//! 3. `BRAVE_*` environment variables, with `.env` loaded first
//!
//! Nested keys use a double underscore, e.g. `BRAVE_SERVER__PORT=3009`.

use crate::types::{Result, SearchError};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "brave-search.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "BRAVE";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Brave Search subscription token (`BRAVE_API_KEY`)
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout enforced by the HTTP client
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Language hint sent with location lookups
    #[serde(default = "default_search_lang")]
    pub search_lang: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Route the streamable HTTP endpoint is mounted on
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_base_url() -> String {
    "https://api.search.brave.com/res/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_search_lang() -> String {
    "en".to_string()
}

fn default_user_agent() -> String {
    format!("brave-search-mcp/{}", env!("CARGO_PKG_VERSION"))
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_path() -> String {
    "/mcp".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            search_lang: default_search_lang(),
            user_agent: default_user_agent(),
            server: ServerSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings for the running process.
    ///
    /// Fails with [`SearchError::Configuration`] when no API key is
    /// available; the server must not start without one.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_sources(path, None)
    }

    /// Build settings from an optional file and an explicit environment map.
    ///
    /// `env: None` reads the process environment.
    pub fn from_sources(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env);

        let settings: Settings = Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(SearchError::Configuration(
                "BRAVE_API_KEY environment variable not set".to_string(),
            ));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SearchError::Configuration(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(SearchError::Configuration(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if !self.server.path.starts_with('/') || self.server.path.len() < 2 {
            return Err(SearchError::Configuration(format!(
                "server.path must be a non-root path starting with '/', got '{}'",
                self.server.path
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                SearchError::Configuration(format!(
                    "Invalid listen address {}:{}: {}",
                    self.server.host, self.server.port, e
                ))
            })
    }
}
