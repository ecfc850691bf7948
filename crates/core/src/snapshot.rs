//! Read-only view of a session for renderers

use crate::board::Board;
use crate::shape::{Position, Shape};
use crate::types::ColorId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Shape,
    pub position: Position,
    /// Where a hard drop would land the active piece
    pub ghost: Position,
    pub next: Shape,
    pub held: Option<Shape>,
    pub hold_available: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub lines_to_next_level: u32,
    pub elapsed_seconds: u64,
    pub drop_interval_ms: u32,
    pub best_score: u32,
    pub new_best: bool,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Board coordinates of the active piece's blocks, including any above row 0
    pub fn active_cells(&self) -> impl Iterator<Item = (i32, i32, ColorId)> + '_ {
        let origin = self.position;
        self.active
            .filled()
            .map(move |(dx, dy, color)| (origin.x + dx, origin.y + dy, color))
    }

    pub fn ghost_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let origin = self.ghost;
        self.active
            .filled()
            .map(move |(dx, dy, _)| (origin.x + dx, origin.y + dy))
    }
}
