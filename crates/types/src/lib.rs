//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the terminal view, and the input mapping alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn column**: `width / 2 - shape_width / 2`, row 0
//!
//! # Drop Speed
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 950ms |
//! | 3 | 900ms |
//! | n | `max(100, 1000 - (n - 1) * 50)` |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//! assert_eq!(action.as_str(), "hardDrop");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::num::NonZeroU8;

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame interval used by the terminal loop (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 50;

/// Fastest gravity interval
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Largest side of any piece shape
pub const MAX_SHAPE_SIDE: usize = 4;

/// Largest board width or height accepted at construction
///
/// Keeps every board coordinate and its terminal projection within `u16`.
pub const MAX_BOARD_SIDE: usize = 255;

/// Line clear scoring table, indexed by `lines - 1`.
///
/// Points are multiplied by the current (1-based) level.
pub const LINE_SCORES: [u32; 4] = [40, 100, 300, 1200];

/// Color identifier of a settled or falling block.
pub type ColorId = NonZeroU8;

/// A cell on the board or inside a piece shape
///
/// - `None`: empty
/// - `Some(id)`: filled with the color `id`
pub type Cell = Option<ColorId>;

/// Build a cell from a raw value where `0` means empty.
///
/// ```
/// use blockfall_types::cell;
///
/// assert_eq!(cell(0), None);
/// assert_eq!(cell(3).map(|c| c.get()), Some(3));
/// ```
pub const fn cell(raw: u8) -> Cell {
    NonZeroU8::new(raw)
}

/// Commands accepted by the game session
///
/// These are produced by the key mapping and consumed by
/// `GameSession::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell, locking it if it cannot fall
    SoftDrop,
    /// Drop piece to the lowest legal row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Swap the active piece with the held one (once per piece)
    Hold,
    /// Toggle pause state
    Pause,
    /// Restart when over, otherwise toggle pause
    Start,
    /// Start a fresh game
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "hold" => Some(GameAction::Hold),
            "pause" => Some(GameAction::Pause),
            "start" => Some(GameAction::Start),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Hold => "hold",
            GameAction::Pause => "pause",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }
}
