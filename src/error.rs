//! Unified error handling for statbot.
//!
//! Every failure while answering a comment is a [`BotError`]. It aborts that
//! comment only; the run loop logs it and moves on.

use crate::db::DbError;
use crate::provider::ProviderError;
use statbot_query::QueryError;
use thiserror::Error;

/// Errors that can occur while answering a comment.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("could not parse request: {0}")]
    Query(#[from] QueryError),

    #[error("stats provider: {0}")]
    Provider(#[from] ProviderError),

    #[error("request log: {0}")]
    Db(#[from] DbError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl BotError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Query(e) => e.error_code(),
            Self::Provider(e) => e.error_code(),
            Self::Db(e) => e.error_code(),
            Self::Io(_) => "io",
        }
    }

    /// Whether the comment itself was at fault, as opposed to the bot's
    /// collaborators. Only these are expected in normal operation.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            Self::Query(_) | Self::Provider(ProviderError::PlayerNotFound(_))
        )
    }
}

/// Result type for request handling.
pub type BotResult<T> = Result<T, BotError>;
