//! Telemetry utilities for request timing and log correlation.

use std::time::Instant;
use tracing::debug;

/// Guard for timing request handling.
///
/// Logs the elapsed time at debug level when dropped.
pub struct RequestTimer {
    url: String,
    start: Instant,
}

impl RequestTimer {
    /// Start timing a request.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            start: Instant::now(),
        }
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        let elapsed_us = u64::try_from(self.start.elapsed().as_micros()).unwrap_or(u64::MAX);
        debug!(url = %self.url, elapsed_us, "Request handled");
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, info_span};

    /// Create a span for one incoming comment.
    pub fn comment(url: &str) -> Span {
        info_span!("comment", url = %url)
    }

    /// Create a span for a resolved query.
    pub fn query(player: &str, range: &str, mode: &str) -> Span {
        info_span!("query", player = %player, range = %range, mode = %mode)
    }
}
