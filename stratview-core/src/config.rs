//! Dashboard configuration: TOML file with environment and flag overrides.
//!
//! Lookup order for the backend base URL: `--api-url` flag, then the
//! `STRATVIEW_API_URL` environment variable, then `config.toml`, then the
//! built-in default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::DEFAULT_PRICE_WINDOW;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001/api";
pub const DEFAULT_INITIAL_CAPITAL: f64 = 100_000.0;
pub const API_URL_ENV: &str = "STRATVIEW_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings shared by the TUI and CLI front-ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL the four endpoint paths are appended to.
    pub api_base_url: String,

    /// Starting capital shown in the capital field at launch.
    pub initial_capital: f64,

    /// How many of the most recent closes the price chart shows.
    pub price_window: usize,

    /// Client-side request timeout. Unset leaves the transport default.
    pub request_timeout_secs: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            initial_capital: DEFAULT_INITIAL_CAPITAL,
            price_window: DEFAULT_PRICE_WINDOW,
            request_timeout_secs: None,
        }
    }
}

impl DashboardConfig {
    /// `<config_dir>/stratview`, falling back to the working directory.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stratview")
    }

    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load from `path`. A missing file yields defaults; a broken one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Apply `STRATVIEW_API_URL` if set.
    pub fn with_env(self) -> Self {
        self.with_api_url(std::env::var(API_URL_ENV).ok())
    }

    /// Override the base URL when `url` is present and non-blank.
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.api_base_url = url;
        }
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
