//! statbot - stats reply bot
//!
//! Reads comments from the configured feed and answers the ones that carry
//! the trigger token.

use statbot::config::{Config, validation};
use statbot::db::Database;
use statbot::{CommentFeed, DatasetProvider, StatBot, StdoutSink};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the replies.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "statbot.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = validation::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        return Err(anyhow::anyhow!(
            "{} configuration error(s) in {}",
            errors.len(),
            config_path
        ));
    }

    info!(trigger = %config.bot.trigger, "Starting statbot");

    let provider = Arc::new(DatasetProvider::open(&config.provider.dataset).await?);
    let db = Database::new(config.database_path()).await?;
    let bot = StatBot::new(provider, db, config.bot.trigger.clone()).await?;

    if let Some(ref titles_path) = config.warmup.titles {
        match tokio::fs::read_to_string(titles_path).await {
            Ok(content) => {
                let titles = content.lines().take(config.warmup.limit);
                bot.warm_up(titles).await?;
            }
            Err(e) => warn!(path = %titles_path, error = %e, "Skipping warm-up"),
        }
    }

    let mut feed = CommentFeed::open(&config.feed.path).await?;
    info!(feed = %config.feed.path, "Reading comments");

    tokio::select! {
        summary = bot.run(&mut feed, &StdoutSink) => {
            let summary = summary?;
            info!(handled = summary.handled, failed = summary.failed, "Done");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
        }
    }

    Ok(())
}
