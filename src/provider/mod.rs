//! Stats provider abstraction.
//!
//! The bot only needs the roster, the stat vocabulary and per-player season
//! lines. Where those come from is up to the provider.

use async_trait::async_trait;
use statbot_query::{SeasonRange, SeasonType, StatValue, Vocabulary};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

pub mod dataset;

pub use dataset::DatasetProvider;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("player not found: {0}")]
    PlayerNotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ProviderError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::PlayerNotFound(_) => "player_not_found",
            Self::Io(_) => "provider_io",
            Self::Parse(_) => "provider_parse",
        }
    }
}

#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Every known player name.
    async fn player_names(&self) -> Result<Vec<String>, ProviderError>;

    /// Every valid stat code.
    async fn valid_stats(&self) -> Result<BTreeSet<String>, ProviderError>;

    /// Warm the cache for a subset of the roster (optional).
    async fn load_players(&self, _names: &HashSet<String>) -> Result<(), ProviderError> {
        Ok(())
    }

    /// Look up one player.
    async fn player(&self, name: &str) -> Result<Box<dyn PlayerHandle>, ProviderError>;
}

/// Season lines of a single player, already loaded.
pub trait PlayerHandle: Send + Sync {
    /// One value tuple per label of [`PlayerHandle::year_range`], aligned with
    /// `codes`. Empty when the player has no `side` data in the range.
    fn stats(&self, codes: &[String], range: &SeasonRange, side: SeasonType) -> Vec<Vec<StatValue>>;

    /// Labels of the seasons the player has on record within `range`, oldest first.
    fn year_range(&self, range: &SeasonRange) -> Vec<String>;
}

/// Snapshot the provider's roster and stat codes.
pub async fn load_vocabulary(provider: &dyn StatsProvider) -> Result<Vocabulary, ProviderError> {
    let names = provider.player_names().await?;
    let stats = provider.valid_stats().await?;
    Ok(Vocabulary::new(names, stats))
}
