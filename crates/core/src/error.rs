//! Construction-time validation errors.
//!
//! Commands on a running session never fail: illegal moves are rejected
//! silently and an unspawnable piece ends the game. Only building a board,
//! catalog, or session from bad inputs is an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board sides must be between 1 and 255, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("piece catalog is empty")]
    EmptyCatalog,

    #[error("shape {index} is invalid: {reason}")]
    InvalidShape { index: usize, reason: &'static str },

    #[error("starting board is {actual_width}x{actual_height}, expected {width}x{height}")]
    BoardMismatch {
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },
}
