//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Terminals
//! without key-release reporting deliver auto-repeat as fresh presses, so
//! the mapping treats `Press` and `Repeat` alike and drops `Release`.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_actionable, should_quit};
