//! # statbot-query
//!
//! Turns free-text stat requests into structured queries and renders the
//! fetched records as a pipe-delimited report.
//!
//! ## Quick Start
//!
//! ```rust
//! use statbot_query::{assemble, Mode, Vocabulary};
//!
//! let vocab = Vocabulary::new(["LeBron James"], ["PTS", "AST"]);
//! let query = assemble("LeBron James !STAT PTS/AST 2019-20", &vocab).unwrap();
//!
//! assert_eq!(query.player_name, "lebron james");
//! assert_eq!(query.stat_codes, vec!["PTS", "AST"]);
//! assert_eq!(query.season_range.as_str(), "2019-20");
//! assert_eq!(query.mode, Mode::Regular);
//! ```
//!
//! Everything here is synchronous and side-effect free. Fetching the records
//! is left to the caller.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod extract;
pub mod query;
pub mod render;
pub mod season;
pub mod vocabulary;
pub mod warmup;

pub use error::QueryError;
pub use extract::{extract_name, extract_season_range, extract_stats, resolve_mode, tokenize};
pub use query::{assemble, assemble_tokens, Mode, SeasonType, StructuredQuery};
pub use render::{render, title_case, Report, StatValue};
pub use season::SeasonRange;
pub use vocabulary::Vocabulary;
pub use warmup::relevant_players;
