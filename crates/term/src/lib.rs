//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: a [`GameView`] paints a
//! [`core::GameSnapshot`](crate::core::GameSnapshot) into a [`FrameBuffer`],
//! and a [`TerminalRenderer`] flushes that buffer through crossterm, sending
//! only what changed since the previous frame.
//!
//! Board cells are two columns wide by default to make squares look square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
