//! Core game logic - pure, deterministic, and testable
//!
//! Everything here is plain data plus rules. There is no terminal, clock, or
//! file access; the host feeds elapsed time and commands into a
//! [`GameSession`] and reads state back out of it.
//!
//! # Module Structure
//!
//! - [`board`]: the settled-cell grid, merging, and line clearing
//! - [`shape`]: piece grids, clockwise rotation, and collision
//! - [`catalog`]: the seven standard tetrominoes and uniform random picks
//! - [`active`]: the falling piece with its queued and held shapes
//! - [`scoring`]: line points, levels, and the gravity curve
//! - [`session`]: one game from spawn to game over
//! - [`snapshot`]: read-only view handed to renderers
//! - [`clock`]: frame delta bookkeeping for hosts
//! - [`best`]: best-score persistence seam
//!
//! # Game Rules
//!
//! - **Uniform picks**: every spawn draws uniformly from the catalog
//! - **Simple kicks**: a blocked rotation tries sideways offsets +1, -2, +3, ...
//! - **Ghost piece**: shows where the current piece will land
//! - **Hold**: store one piece for later use (once per piece)
//! - **Scoring**: 40/100/300/1200 times the level, a level every 10 lines
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameSession};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameSession::with_seed(GameConfig::default(), 12345).unwrap();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! ```
//!
//! # Timing
//!
//! Gravity starts at 1000ms per row and speeds up by 50ms per level down to
//! 100ms. Call [`GameSession::tick`] every frame with the elapsed time.

pub mod active;
pub mod best;
pub mod board;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod scoring;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use active::{ActivePiece, DropOutcome};
pub use best::{MemoryScoreStore, ScoreStore, BEST_SCORE_KEY};
pub use board::Board;
pub use catalog::{Catalog, STANDARD_LETTERS, STANDARD_PIECES};
pub use clock::FrameClock;
pub use config::GameConfig;
pub use error::ConfigError;
pub use scoring::{calculate_level, calculate_line_score, drop_interval_ms, lines_to_next_level};
pub use session::{GameSession, LockEvent};
pub use shape::{collides, rotate_clockwise, Position, Shape};
pub use snapshot::GameSnapshot;
