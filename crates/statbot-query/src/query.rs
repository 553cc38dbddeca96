//! Structured queries assembled from comment text.

use std::fmt;

use crate::error::QueryError;
use crate::extract::{extract_name, extract_season_range, extract_stats, resolve_mode, tokenize};
use crate::season::SeasonRange;
use crate::vocabulary::Vocabulary;

/// Which competition phases a query covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Mode {
    /// Regular season only.
    #[default]
    Regular,
    /// Playoffs only.
    Playoffs,
    /// Playoffs, then regular season.
    Both,
}

impl Mode {
    /// Sides to fetch and render, in report order.
    pub fn sides(self) -> &'static [SeasonType] {
        match self {
            Self::Regular => &[SeasonType::Regular],
            Self::Playoffs => &[SeasonType::Playoffs],
            Self::Both => &[SeasonType::Playoffs, SeasonType::Regular],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Regular => "regular",
            Self::Playoffs => "playoffs",
            Self::Both => "both",
        })
    }
}

/// One side of a season: the regular season or the playoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SeasonType {
    /// Regular season games.
    Regular,
    /// Playoff games.
    Playoffs,
}

impl SeasonType {
    /// Section label used in rendered reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular Season:",
            Self::Playoffs => "Playoffs:",
        }
    }
}

/// A fully validated stats request.
///
/// Only [`assemble`] builds one, so every field already holds:
/// the name is a roster entry, the codes are a non-empty subset of the
/// vocabulary and the season range is well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StructuredQuery {
    /// Lowercase roster name.
    pub player_name: String,
    /// Uppercase stat codes in the order they were written.
    pub stat_codes: Vec<String>,
    /// Requested season span.
    pub season_range: SeasonRange,
    /// Requested competition phases.
    pub mode: Mode,
}

/// Tokenize a comment body and assemble a query from it.
pub fn assemble(body: &str, vocab: &Vocabulary) -> Result<StructuredQuery, QueryError> {
    assemble_tokens(&tokenize(body), vocab)
}

/// Assemble a query from an already tokenized comment.
///
/// Extractors run in order name, stats, season range, mode; the first
/// failure is returned. A stat word with no exact codes is a
/// [`QueryError::StatNotFound`].
pub fn assemble_tokens(tokens: &[&str], vocab: &Vocabulary) -> Result<StructuredQuery, QueryError> {
    let player_name = extract_name(tokens, vocab)?;

    let stat_codes = extract_stats(tokens, vocab)?;
    if stat_codes.is_empty() {
        return Err(QueryError::StatNotFound);
    }

    let season_range = extract_season_range(tokens)?;
    let mode = resolve_mode(tokens);

    Ok(StructuredQuery {
        player_name,
        stat_codes,
        season_range,
        mode,
    })
}
