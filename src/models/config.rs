//! Configuration model.
//!
//! The endpoint list is never hardcoded. Resolution order:
//! 1. URLs passed on the command line
//! 2. A TOML file given with `--config`
//! 3. The `EPG_COVERAGE_ENDPOINTS` environment variable (comma-separated)
//! 4. `config.toml` in the platform config directory

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::services::epg::DEFAULT_TIMEOUT_SECS;
use crate::{Error, Result};

/// Environment variable holding a comma-separated endpoint list.
pub const ENDPOINTS_ENV: &str = "EPG_COVERAGE_ENDPOINTS";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// EPG backend base URLs to check, in order.
    pub endpoints: Vec<String>,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Also fetch the channel-name count per endpoint.
    #[serde(default)]
    pub detailed: bool,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: Vec::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            detailed: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;
        toml::from_str(&content).map_err(|e| Error::InvalidConfig {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Parse an endpoint list from a comma-separated string.
    pub fn endpoints_from_csv(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .collect()
    }

    /// Resolve the effective configuration.
    ///
    /// CLI URLs win over a config file, which wins over the environment
    /// variable, which wins over the default config file. Fails with
    /// [`Error::NoEndpoints`] when nothing yields any endpoint.
    pub fn resolve(urls: Vec<String>, config_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = config_path {
            Config::from_file(path)?
        } else if let Ok(value) = std::env::var(ENDPOINTS_ENV) {
            Config {
                endpoints: Config::endpoints_from_csv(&value),
                ..Config::default()
            }
        } else {
            let default_path = default_config_path();
            if default_path.exists() {
                Config::from_file(&default_path)?
            } else {
                Config::default()
            }
        };

        if !urls.is_empty() {
            config.endpoints = urls
                .into_iter()
                .map(|u| u.trim_end_matches('/').to_string())
                .collect();
        }

        if config.endpoints.is_empty() {
            return Err(Error::NoEndpoints);
        }

        Ok(config)
    }
}

/// Default config file location under the platform config directory.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("epg-coverage")
        .join("config.toml")
}
