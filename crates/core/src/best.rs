//! Best-score storage boundary
//!
//! The engine only needs to know the best score at the start of a game. Where
//! that number lives is up to the host: it is stored under a string key as a
//! plain decimal integer.

use std::collections::HashMap;

/// Key under which the front end stores its best score
pub const BEST_SCORE_KEY: &str = "blockfall.best";

pub trait ScoreStore {
    type Error;

    /// Stored value for `key`, or `None` if nothing was saved yet.
    fn load(&self, key: &str) -> Result<Option<u32>, Self::Error>;

    fn save(&mut self, key: &str, value: u32) -> Result<(), Self::Error>;
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    values: HashMap<String, u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    type Error = std::convert::Infallible;

    fn load(&self, key: &str) -> Result<Option<u32>, Self::Error> {
        Ok(self.values.get(key).copied())
    }

    fn save(&mut self, key: &str, value: u32) -> Result<(), Self::Error> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Parse a stored record. Surrounding whitespace is ignored; anything that
/// is not a non-negative decimal integer counts as no record.
pub fn parse_record(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}
