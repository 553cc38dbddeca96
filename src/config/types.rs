//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Request handling.
    #[serde(default)]
    pub bot: BotConfig,
    /// Stats dataset.
    pub provider: ProviderConfig,
    /// Request log database.
    pub database: Option<DatabaseConfig>,
    /// Comment source.
    #[serde(default)]
    pub feed: FeedConfig,
    /// Provider cache warm-up.
    #[serde(default)]
    pub warmup: WarmupConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Database path, falling back to `statbot.db`.
    pub fn database_path(&self) -> &str {
        self.database
            .as_ref()
            .map(|d| d.path.as_str())
            .unwrap_or("statbot.db")
    }
}

/// Request handling configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Token a comment body must contain to be answered (default: "!STAT").
    #[serde(default = "default_trigger")]
    pub trigger: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
        }
    }
}

fn default_trigger() -> String {
    "!STAT".to_string()
}

/// Stats dataset configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Path to the JSON dataset (roster, stat codes, per-season lines).
    pub dataset: String,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to SQLite database file, or ":memory:".
    pub path: String,
}

/// Comment feed configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Newline-delimited JSON comments; "-" reads stdin (default).
    #[serde(default = "default_feed_path")]
    pub path: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            path: default_feed_path(),
        }
    }
}

fn default_feed_path() -> String {
    "-".to_string()
}

/// Provider warm-up configuration.
///
/// Players named in recent titles are loaded before the first comment so
/// the likeliest requests hit a warm cache.
#[derive(Debug, Clone, Deserialize)]
pub struct WarmupConfig {
    /// File with one recent title per line. Warm-up is skipped when unset.
    #[serde(default)]
    pub titles: Option<String>,
    /// Number of titles to scan (default: 5).
    #[serde(default = "default_warmup_limit")]
    pub limit: usize,
}

impl Default for WarmupConfig {
    fn default() -> Self {
        Self {
            titles: None,
            limit: default_warmup_limit(),
        }
    }
}

fn default_warmup_limit() -> usize {
    5
}
