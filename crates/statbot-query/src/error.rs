//! Extraction errors.

use thiserror::Error;

/// Reasons a comment could not be turned into a query.
///
/// A malformed season range is reported as [`QueryError::SeasonRangeNotFound`]:
/// a near-miss token and a missing token look the same to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No adjacent token pair matched a roster name.
    #[error("no player name found")]
    NameNotFound,

    /// No token mentioned a known stat code.
    #[error("no stat codes found")]
    StatNotFound,

    /// No token was a valid `ccYY-ZW` season range.
    #[error("no season range found")]
    SeasonRangeNotFound,
}

impl QueryError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NameNotFound => "name_not_found",
            Self::StatNotFound => "stat_not_found",
            Self::SeasonRangeNotFound => "season_range_not_found",
        }
    }
}
