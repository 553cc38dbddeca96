//! Token-level extractors.
//!
//! Each extractor is a first-match scan over the token sequence. None of them
//! rank candidates: the same comment always yields the same interpretation.

use crate::error::QueryError;
use crate::query::Mode;
use crate::season::SeasonRange;
use crate::vocabulary::Vocabulary;

/// Split a comment body on single spaces.
///
/// Runs of spaces yield empty tokens; they never match anything.
pub fn tokenize(body: &str) -> Vec<&str> {
    body.split(' ').collect()
}

/// Find the first adjacent token pair that spells a roster name.
///
/// Returns the lowercased name. Only two-word names are considered.
pub fn extract_name(tokens: &[&str], vocab: &Vocabulary) -> Result<String, QueryError> {
    tokens
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]).to_lowercase())
        .find(|candidate| vocab.contains_name(candidate))
        .ok_or(QueryError::NameNotFound)
}

/// Find the requested stat codes.
///
/// The first token whose uppercased form contains any code is the stat word.
/// It is split on `/` and only pieces that exactly match a code are kept, in
/// order. A stat word with no exact pieces (e.g. `PTSX`) yields an empty list.
pub fn extract_stats(tokens: &[&str], vocab: &Vocabulary) -> Result<Vec<String>, QueryError> {
    let stat_word = tokens
        .iter()
        .find(|token| vocab.mentions_stat(&token.to_uppercase()))
        .ok_or(QueryError::StatNotFound)?;

    Ok(stat_word
        .split('/')
        .map(str::to_uppercase)
        .filter(|piece| vocab.is_stat(piece))
        .collect())
}

/// Find the first token that is a valid season range.
pub fn extract_season_range(tokens: &[&str]) -> Result<SeasonRange, QueryError> {
    tokens
        .iter()
        .find_map(|token| SeasonRange::parse(token))
        .ok_or(QueryError::SeasonRangeNotFound)
}

/// Determine the reporting mode from flag tokens.
///
/// Playoff flags win over "both" flags. Position is irrelevant.
pub fn resolve_mode(tokens: &[&str]) -> Mode {
    let has = |flag: &str| tokens.iter().any(|token| *token == flag);
    if has("-p") || has("-playoffs") {
        Mode::Playoffs
    } else if has("-b") || has("-both") {
        Mode::Both
    } else {
        Mode::Regular
    }
}
