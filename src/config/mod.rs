//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions (Config, BotConfig, ProviderConfig, ...)
//! - [`validation`]: Start-up checks on a loaded config

mod types;
pub mod validation;

pub use types::{
    BotConfig, Config, ConfigError, DatabaseConfig, FeedConfig, ProviderConfig, WarmupConfig,
};
