//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use std::path::Path;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("bot.trigger must not be empty")]
    EmptyTrigger,
    #[error("bot.trigger must not contain spaces, got '{0}'")]
    TriggerHasSpace(String),
    #[error("provider.dataset does not exist: {0}")]
    DatasetNotFound(String),
    #[error("feed.path does not exist: {0}")]
    FeedNotFound(String),
    #[error("warmup.titles does not exist: {0}")]
    TitlesNotFound(String),
    #[error("database.path must name a file: {0:?}")]
    DatabasePathInvalid(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let trigger = &config.bot.trigger;
    if trigger.is_empty() {
        errors.push(ValidationError::EmptyTrigger);
    } else if trigger.contains(char::is_whitespace) {
        errors.push(ValidationError::TriggerHasSpace(trigger.clone()));
    }

    if !Path::new(&config.provider.dataset).exists() {
        errors.push(ValidationError::DatasetNotFound(
            config.provider.dataset.clone(),
        ));
    }

    if config.feed.path != "-" && !Path::new(&config.feed.path).exists() {
        errors.push(ValidationError::FeedNotFound(config.feed.path.clone()));
    }

    if let Some(ref titles) = config.warmup.titles
        && !Path::new(titles).exists()
    {
        errors.push(ValidationError::TitlesNotFound(titles.clone()));
    }

    // Missing parent directories are created on connect.
    if let Some(ref db) = config.database
        && db.path != ":memory:"
        && (db.path.trim().is_empty() || Path::new(&db.path).is_dir())
    {
        errors.push(ValidationError::DatabasePathInvalid(db.path.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_dataset(dataset: &str, extra: &str) -> Config {
        let toml = format!("[provider]\ndataset = {:?}\n{}", dataset, extra);
        toml::from_str(&toml).unwrap()
    }

    #[test]
    fn test_valid_config_passes() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("nba.json");
        std::fs::write(&dataset, "{}").unwrap();

        let config = config_with_dataset(dataset.to_str().unwrap(), "");
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_trigger_fails() {
        let config = config_with_dataset("/nonexistent/nba.json", "[bot]\ntrigger = \"\"\n");
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::EmptyTrigger)));
    }

    #[test]
    fn test_trigger_with_space_fails() {
        let config = config_with_dataset("/nonexistent/nba.json", "[bot]\ntrigger = \"! STAT\"\n");
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::TriggerHasSpace(_))));
    }

    #[test]
    fn test_missing_dataset_fails() {
        let config = config_with_dataset("/nonexistent/nba.json", "");
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::DatasetNotFound(_))));
    }

    #[test]
    fn test_missing_feed_and_titles_fail() {
        let config = config_with_dataset(
            "/nonexistent/nba.json",
            "[feed]\npath = \"/nonexistent/feed.jsonl\"\n[warmup]\ntitles = \"/nonexistent/titles.txt\"\n",
        );
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::FeedNotFound(_))));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::TitlesNotFound(_))));
    }

    #[test]
    fn test_database_path_naming_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_dataset(
            "/nonexistent/nba.json",
            &format!("[database]\npath = {:?}\n", dir.path().to_str().unwrap()),
        );
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::DatabasePathInvalid(_))));
    }

    #[test]
    fn test_database_in_missing_dir_passes() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("nba.json");
        std::fs::write(&dataset, "{}").unwrap();
        let db = dir.path().join("data").join("statbot.db");

        let config = config_with_dataset(
            dataset.to_str().unwrap(),
            &format!("[database]\npath = {:?}\n", db.to_str().unwrap()),
        );
        assert!(validate(&config).is_ok());
    }
}
