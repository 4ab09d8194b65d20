use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Document served by the collector when nothing else is configured
pub const DEFAULT_VERSIONS_JSON_URL: &str = "https://versions.kjnet.xyz/versions.json";

/// Environment variable overriding the document URL
pub const VERSIONS_JSON_URL_ENV: &str = "VERSIONS_JSON_URL";

/// Timeout for fetching the versions document in milliseconds (30 seconds)
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for fetching and reporting package versions
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Where the collector publishes `versions.json`
    pub versions_json_url: String,
    /// Fetch timeout in milliseconds
    pub fetch_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            versions_json_url: DEFAULT_VERSIONS_JSON_URL.to_string(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Read a JSON config file; missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply `VERSIONS_JSON_URL` from the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_url(std::env::var(VERSIONS_JSON_URL_ENV).ok())
    }

    /// Override the document URL. Empty values are ignored.
    pub fn with_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            self.versions_json_url = url;
        }
        self
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    fn with_env_url(self, env_url: Option<String>) -> Self {
        self.with_url(env_url)
    }
}
