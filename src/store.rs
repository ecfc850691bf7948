//! File-backed best-score store.
//!
//! One file per key under a data directory, holding a plain decimal integer.
//! The directory defaults to `<platform data dir>/blockfall` and can be
//! overridden with `BLOCKFALL_DATA_DIR`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::best::parse_record;
use crate::core::{ScoreStore, BEST_SCORE_KEY};

const APP_DIR: &str = "blockfall";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScoreStore {
    dir: PathBuf,
}

impl FileScoreStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform data directory, falling back to the working directory.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl ScoreStore for FileScoreStore {
    type Error = anyhow::Error;

    fn load(&self, key: &str) -> Result<Option<u32>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(parse_record(&raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read {}", path.display())),
        }
    }

    fn save(&mut self, key: &str, value: u32) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create {}", self.dir.display()))?;
        let path = self.path_for(key);
        fs::write(&path, value.to_string()).with_context(|| format!("write {}", path.display()))
    }
}

/// Remembers the last best score written so each improvement is saved once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestRecord {
    recorded: u32,
}

impl BestRecord {
    /// Read the stored best. A missing or garbled record counts as zero; a
    /// store that cannot be read at all is an error.
    pub fn load<S: ScoreStore>(store: &S) -> Result<Self, S::Error> {
        let recorded = store.load(BEST_SCORE_KEY)?.unwrap_or(0);
        Ok(Self { recorded })
    }

    pub fn recorded(&self) -> u32 {
        self.recorded
    }

    /// Save `best` if it beats what was last recorded. Returns whether a
    /// write happened.
    pub fn persist<S: ScoreStore>(&mut self, store: &mut S, best: u32) -> Result<bool, S::Error> {
        if best <= self.recorded {
            return Ok(false);
        }
        store.save(BEST_SCORE_KEY, best)?;
        self.recorded = best;
        Ok(true)
    }
}
