//! Session configuration

use crate::board::check_dimensions;
use crate::catalog::Catalog;
use crate::error::ConfigError;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub catalog: Catalog,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH as usize,
            height: BOARD_HEIGHT as usize,
            catalog: Catalog::standard(),
        }
    }
}

impl GameConfig {
    /// Standard catalog on a `width x height` board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimensions(self.width, self.height)?;
        if self.catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(())
    }
}
