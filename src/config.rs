// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file support for sitesearch
//!
//! Loads configuration from .sitesearchrc.toml in current directory or ~/.config/sitesearch/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::context::DEFAULT_CONTEXT_LIMIT;
use crate::fetch::DEFAULT_TIMEOUT_SECS;
use crate::index::DEFAULT_SHARD_EXTENSION;

/// Shortest query the engine accepts; shorter ones are too unselective.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

const LOCAL_CONFIG_FILE: &str = ".sitesearchrc.toml";

/// Output format for results (mirrored from cli for library use)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration loaded from .sitesearchrc.toml or ~/.config/sitesearch/config.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL or directory holding the generated shards
    pub base_path: Option<String>,
    /// Extension of shard files (default: js)
    pub shard_extension: Option<String>,
    /// Per-request timeout in seconds for HTTP fetches
    pub timeout_secs: Option<u64>,
    /// Queries with fewer characters are rejected
    pub min_query_len: Option<usize>,
    /// Paragraphs of context returned per document
    pub context_limit: Option<usize>,
    /// Local entry list (JSON array of [permalink, title]) used to label results
    pub entries_file: Option<PathBuf>,
    /// Default output format (text or json)
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from files
    ///
    /// Precedence (highest to lowest):
    /// 1. .sitesearchrc.toml in current directory
    /// 2. ~/.config/sitesearch/config.toml
    pub fn load() -> Self {
        if let Some(config) = Self::load_from_path(Path::new(LOCAL_CONFIG_FILE)) {
            return config;
        }

        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".config").join("sitesearch").join("config.toml");
            if let Some(config) = Self::load_from_path(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    fn load_from_path(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match Self::from_toml(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Get output format from config, parsing the string to ConfigOutputFormat
    pub fn output_format(&self) -> Option<ConfigOutputFormat> {
        self.default_format
            .as_ref()
            .and_then(|s| match s.to_lowercase().as_str() {
                "json" => Some(ConfigOutputFormat::Json),
                "text" => Some(ConfigOutputFormat::Text),
                _ => None,
            })
    }

    /// Merge CLI base path with config (CLI wins)
    pub fn merge_base_path(&self, cli_value: Option<&str>) -> Option<String> {
        cli_value
            .map(str::to_string)
            .or_else(|| self.base_path.clone())
    }

    /// Merge CLI context limit with config (CLI wins)
    pub fn merge_context_limit(&self, cli_value: Option<usize>) -> usize {
        cli_value
            .or(self.context_limit)
            .unwrap_or(DEFAULT_CONTEXT_LIMIT)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn shard_extension(&self) -> &str {
        self.shard_extension
            .as_deref()
            .unwrap_or(DEFAULT_SHARD_EXTENSION)
    }

    pub fn min_query_len(&self) -> usize {
        self.min_query_len.unwrap_or(DEFAULT_MIN_QUERY_LEN)
    }
}
