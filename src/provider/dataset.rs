//! JSON file-backed stats provider.
//!
//! ```json
//! {
//!   "stats": ["PTS", "AST"],
//!   "players": {
//!     "lebron james": {
//!       "2019-20": { "regular": { "PTS": 25.3 }, "playoffs": { "PTS": 27.0 } }
//!     }
//!   }
//! }
//! ```
//!
//! Player entries stay as raw JSON until first requested (or warmed by
//! [`StatsProvider::load_players`]); parsed records are cached.

use super::{PlayerHandle, ProviderError, StatsProvider};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Deserialize;
use statbot_query::{SeasonRange, SeasonType, StatValue};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct DatasetFile {
    stats: Vec<String>,
    #[serde(default)]
    players: HashMap<String, serde_json::Value>,
}

/// Stat lines for one season, keyed by uppercase stat code.
#[derive(Debug, Clone, Default, Deserialize)]
struct SeasonLine {
    #[serde(default)]
    regular: Option<HashMap<String, StatValue>>,
    #[serde(default)]
    playoffs: Option<HashMap<String, StatValue>>,
}

impl SeasonLine {
    fn side(&self, side: SeasonType) -> Option<&HashMap<String, StatValue>> {
        match side {
            SeasonType::Regular => self.regular.as_ref(),
            SeasonType::Playoffs => self.playoffs.as_ref(),
        }
    }

    fn normalize(self) -> Self {
        let upper = |m: HashMap<String, StatValue>| -> HashMap<String, StatValue> {
            m.into_iter()
                .map(|(code, value)| (code.to_uppercase(), value))
                .collect()
        };
        Self {
            regular: self.regular.map(upper),
            playoffs: self.playoffs.map(upper),
        }
    }
}

/// Season label ("2019-20") to stat lines, in chronological order.
type PlayerRecord = BTreeMap<String, SeasonLine>;

/// Stats provider backed by a single JSON dataset.
pub struct DatasetProvider {
    stats: BTreeSet<String>,
    raw: HashMap<String, serde_json::Value>,
    warm: RwLock<HashMap<String, Arc<PlayerRecord>>>,
}

impl DatasetProvider {
    /// Read a dataset file.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let provider = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            players = provider.raw.len(),
            stats = provider.stats.len(),
            "Dataset loaded"
        );
        Ok(provider)
    }

    /// Parse a dataset from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, ProviderError> {
        let file: DatasetFile = serde_json::from_str(content)?;
        Ok(Self {
            stats: file.stats.iter().map(|s| s.to_uppercase()).collect(),
            raw: file
                .players
                .into_iter()
                .map(|(name, value)| (name.to_lowercase(), value))
                .collect(),
            warm: RwLock::new(HashMap::new()),
        })
    }

    /// Number of parsed player records held in memory.
    pub fn warm_count(&self) -> usize {
        self.warm.read().len()
    }

    fn parse_player(&self, name: &str) -> Result<Arc<PlayerRecord>, ProviderError> {
        let value = self
            .raw
            .get(name)
            .ok_or_else(|| ProviderError::PlayerNotFound(name.to_string()))?;

        let record: BTreeMap<String, SeasonLine> = serde_json::from_value(value.clone())?;
        let record: PlayerRecord = record
            .into_iter()
            .map(|(label, line)| (label, line.normalize()))
            .collect();

        let record = Arc::new(record);
        self.warm.write().insert(name.to_string(), Arc::clone(&record));
        Ok(record)
    }
}

#[async_trait]
impl StatsProvider for DatasetProvider {
    async fn player_names(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self.raw.keys().cloned().collect())
    }

    async fn valid_stats(&self) -> Result<BTreeSet<String>, ProviderError> {
        Ok(self.stats.clone())
    }

    async fn load_players(&self, names: &HashSet<String>) -> Result<(), ProviderError> {
        for name in names {
            let name = name.to_lowercase();
            if self.warm.read().contains_key(&name) {
                continue;
            }
            match self.parse_player(&name) {
                Ok(_) => debug!(player = %name, "Player warmed"),
                Err(ProviderError::PlayerNotFound(_)) => {
                    debug!(player = %name, "Skipping unknown player")
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    async fn player(&self, name: &str) -> Result<Box<dyn PlayerHandle>, ProviderError> {
        let name = name.to_lowercase();
        let cached = self.warm.read().get(&name).cloned();
        let record = match cached {
            Some(record) => {
                debug!(player = %name, "Player cache hit");
                record
            }
            None => self.parse_player(&name)?,
        };
        Ok(Box::new(DatasetPlayer { record }))
    }
}

struct DatasetPlayer {
    record: Arc<PlayerRecord>,
}

fn label_start_year(label: &str) -> Option<u16> {
    label.get(0..4)?.parse().ok()
}

impl PlayerHandle for DatasetPlayer {
    fn stats(&self, codes: &[String], range: &SeasonRange, side: SeasonType) -> Vec<Vec<StatValue>> {
        let lines: Vec<Option<&HashMap<String, StatValue>>> = self
            .year_range(range)
            .iter()
            .map(|label| self.record.get(label).and_then(|line| line.side(side)))
            .collect();

        if lines.iter().all(Option::is_none) {
            return Vec::new();
        }

        lines
            .into_iter()
            .map(|line| {
                codes
                    .iter()
                    .map(|code| {
                        line.and_then(|values| values.get(&code.to_uppercase()))
                            .cloned()
                            .unwrap_or_else(StatValue::missing)
                    })
                    .collect()
            })
            .collect()
    }

    fn year_range(&self, range: &SeasonRange) -> Vec<String> {
        let (start, end) = (range.start_year(), range.end_year());
        self.record
            .keys()
            .filter(|label| label_start_year(label).is_some_and(|year| year >= start && year < end))
            .cloned()
            .collect()
    }
}
