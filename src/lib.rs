//! statbot - stats reply bot.
//!
//! Answers comments like `LeBron James !STAT PTS/AST 2018-20 -b` with
//! pipe-delimited stat tables. Parsing and rendering live in the
//! `statbot-query` crate; this crate wires them to a stats provider, a
//! comment feed and a request log.

pub mod bot;
pub mod config;
pub mod db;
pub mod error;
pub mod feed;
pub mod provider;
pub mod telemetry;

pub use bot::{RunSummary, StatBot};
pub use error::{BotError, BotResult};
pub use feed::{Comment, CommentFeed, ReplySink, StdoutSink};
pub use provider::{DatasetProvider, PlayerHandle, ProviderError, StatsProvider};
