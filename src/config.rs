//! Front-end run configuration.
//!
//! Board size and saving come from command-line flags; file locations come
//! from the environment:
//!
//! - `BLOCKFALL_EVENT_LOG`: append session events as JSON lines to this file
//! - `BLOCKFALL_DATA_DIR`: directory for the best-score record

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::GameConfig;
use crate::store::FileScoreStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub game: GameConfig,
    /// Persist the best score between runs
    pub save: bool,
    pub data_dir: PathBuf,
    pub event_log: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            save: true,
            data_dir: FileScoreStore::default_dir(),
            event_log: None,
        }
    }
}

impl RunConfig {
    /// Defaults overlaid with `BLOCKFALL_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut config = Self::default();
        if let Some(dir) = non_empty("BLOCKFALL_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.event_log = non_empty("BLOCKFALL_EVENT_LOG").map(PathBuf::from);
        config
    }

    pub fn with_board_size(mut self, width: Option<usize>, height: Option<usize>) -> Self {
        if let Some(width) = width {
            self.game.width = width;
        }
        if let Some(height) = height {
            self.game.height = height;
        }
        self
    }

    pub fn with_save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }

    /// Reject unusable settings before touching the terminal.
    pub fn validate(&self) -> Result<()> {
        self.game.validate().context("invalid game configuration")
    }

    pub fn score_store(&self) -> FileScoreStore {
        FileScoreStore::new(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_overrides_paths() {
        let config = RunConfig::from_lookup(lookup(&[
            ("BLOCKFALL_DATA_DIR", "/tmp/bf"),
            ("BLOCKFALL_EVENT_LOG", " events.jsonl "),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/bf"));
        assert_eq!(config.event_log, Some(PathBuf::from("events.jsonl")));
        assert!(config.save);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = RunConfig::from_lookup(lookup(&[("BLOCKFALL_EVENT_LOG", "  ")]));
        assert_eq!(config.event_log, None);
        assert_eq!(config.data_dir, FileScoreStore::default_dir());
    }

    #[test]
    fn board_size_flags() {
        let config = RunConfig::from_lookup(lookup(&[])).with_board_size(Some(12), None);
        assert_eq!((config.game.width, config.game.height), (12, 20));
        assert!(config.validate().is_ok());

        let config = config.with_board_size(None, Some(0));
        assert!(config.validate().is_err());

        let config = config.with_board_size(Some(40_000), Some(20));
        assert!(config.validate().is_err());
    }
}
