//! The stats reply bot.
//!
//! Owns the vocabulary snapshot, the stats provider and the request log.
//! Comments are handled one at a time:
//! - parse the body into a [`StructuredQuery`](statbot_query::StructuredQuery)
//! - resolve the player and fetch the sides the mode asks for
//! - render the tables, log the request, post the reply

use crate::db::Database;
use crate::error::{BotError, BotResult};
use crate::feed::{Comment, CommentFeed, ReplySink};
use crate::provider::{StatsProvider, load_vocabulary};
use crate::telemetry::{RequestTimer, spans};
use statbot_query::{Report, SeasonType, Vocabulary, assemble, relevant_players, render};
use std::sync::Arc;
use tracing::{Instrument, debug, info, warn};

/// Counters for one pass over a feed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Comments containing the trigger.
    pub seen: usize,
    /// Comments answered.
    pub handled: usize,
    /// Comments that could not be answered.
    pub failed: usize,
}

/// Stats reply bot.
pub struct StatBot {
    vocab: Arc<Vocabulary>,
    provider: Arc<dyn StatsProvider>,
    db: Database,
    trigger: String,
}

impl StatBot {
    /// Create a bot, snapshotting the provider's roster and stat codes.
    pub async fn new(
        provider: Arc<dyn StatsProvider>,
        db: Database,
        trigger: impl Into<String>,
    ) -> BotResult<Self> {
        let vocab = load_vocabulary(provider.as_ref()).await?;
        info!(
            players = vocab.name_count(),
            stats = vocab.stat_count(),
            "Vocabulary loaded"
        );
        Ok(Self {
            vocab: Arc::new(vocab),
            provider,
            db,
            trigger: trigger.into(),
        })
    }

    /// The current vocabulary snapshot.
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocab
    }

    /// Request log handle.
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Replace the vocabulary with a fresh snapshot from the provider.
    pub async fn refresh_vocabulary(&mut self) -> BotResult<()> {
        let vocab = load_vocabulary(self.provider.as_ref()).await?;
        info!(players = vocab.name_count(), "Vocabulary refreshed");
        self.vocab = Arc::new(vocab);
        Ok(())
    }

    /// Warm the provider with players named in recent titles.
    ///
    /// Returns how many roster names were selected.
    pub async fn warm_up<I, S>(&self, titles: I) -> BotResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let relevant = relevant_players(titles, &self.vocab);
        self.provider.load_players(&relevant).await?;
        info!(players = relevant.len(), "Provider warmed");
        Ok(relevant.len())
    }

    /// Whether a comment asks for the bot.
    pub fn is_triggered(&self, comment: &Comment) -> bool {
        comment.body.contains(self.trigger.as_str())
    }

    /// Answer one comment, returning the reply text.
    ///
    /// The request is appended to the log before returning. Nothing is
    /// logged when parsing or fetching fails.
    pub async fn process(&self, comment: &Comment) -> BotResult<String> {
        let _timer = RequestTimer::new(comment.url.as_str());

        let query = assemble(&comment.body, &self.vocab)?;
        let span = spans::query(
            &query.player_name,
            query.season_range.as_str(),
            &query.mode.to_string(),
        );

        async move {
            let player = self.provider.player(&query.player_name).await?;

            let mut playoffs = Vec::new();
            let mut regular = Vec::new();
            for &side in query.mode.sides() {
                let rows = player.stats(&query.stat_codes, &query.season_range, side);
                debug!(side = ?side, rows = rows.len(), "Fetched stats");
                match side {
                    SeasonType::Playoffs => playoffs = rows,
                    SeasonType::Regular => regular = rows,
                }
            }
            let seasons = player.year_range(&query.season_range);

            let text = render(&Report {
                player_name: &query.player_name,
                season_range: query.season_range.as_str(),
                mode: query.mode,
                stat_codes: &query.stat_codes,
                seasons: &seasons,
                playoffs: &playoffs,
                regular: &regular,
            });

            let id = self
                .db
                .requests()
                .append(&comment.body, &comment.url, &text)
                .await?;
            info!(log_id = id, stats = ?query.stat_codes, "Request answered");

            Ok::<_, BotError>(text)
        }
        .instrument(span)
        .await
    }

    /// Answer every triggered comment in `feed` until it ends.
    ///
    /// A failing comment is logged and counted; it never stops the loop.
    /// Only a read error on the feed itself is returned.
    pub async fn run(&self, feed: &mut CommentFeed, sink: &dyn ReplySink) -> BotResult<RunSummary> {
        let mut summary = RunSummary::default();

        while let Some(comment) = feed.next_comment().await? {
            if !self.is_triggered(&comment) {
                continue;
            }
            summary.seen += 1;

            let outcome = async {
                let text = self.process(&comment).await?;
                sink.post(&comment, &text).await?;
                Ok::<_, BotError>(())
            }
            .instrument(spans::comment(&comment.url))
            .await;

            match outcome {
                Ok(()) => summary.handled += 1,
                Err(e) => {
                    summary.failed += 1;
                    warn!(
                        url = %comment.url,
                        error_code = e.error_code(),
                        bad_request = e.is_bad_request(),
                        error = %e,
                        "Request failed"
                    );
                }
            }
        }

        info!(
            seen = summary.seen,
            handled = summary.handled,
            failed = summary.failed,
            "Feed finished"
        );
        Ok(summary)
    }
}
