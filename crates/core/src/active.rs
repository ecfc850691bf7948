//! Active piece - the player-controlled falling shape
//!
//! A piece is `Falling` while moves keep it airborne. A downward step that
//! would collide puts it in `Landed`, after which the session merges it into
//! the board (`Locked`) and moves on with [`ActivePiece::advance`]. Every
//! committed move or rotation has been checked against the board first.

use crate::board::Board;
use crate::shape::{collides, Position, Shape};

/// Result of trying to move the piece down one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down and is still falling
    Moved,
    /// The row below is blocked; the piece must lock where it is
    Landed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    shape: Shape,
    position: Position,
    held: Option<Shape>,
    next: Shape,
    hold_used: bool,
}

/// Horizontally centered column at row 0
pub fn spawn_position(board_width: usize, shape: &Shape) -> Position {
    Position::new((board_width / 2) as i32 - (shape.width() / 2) as i32, 0)
}

impl ActivePiece {
    /// Place `shape` at the spawn position with `next` queued behind it.
    pub fn spawn(shape: Shape, next: Shape, board_width: usize) -> Self {
        let position = spawn_position(board_width, &shape);
        Self {
            shape,
            position,
            held: None,
            next,
            hold_used: false,
        }
    }

    /// Promote the queued shape, queue `fresh`, keep the held shape.
    ///
    /// This is the only place hold becomes available again.
    pub fn advance(&mut self, fresh: Shape, board_width: usize) {
        self.shape = std::mem::replace(&mut self.next, fresh);
        self.position = spawn_position(board_width, &self.shape);
        self.hold_used = false;
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn held(&self) -> Option<&Shape> {
        self.held.as_ref()
    }

    pub fn next(&self) -> &Shape {
        &self.next
    }

    pub fn hold_used(&self) -> bool {
        self.hold_used
    }

    pub fn collides(&self, board: &Board) -> bool {
        collides(board, &self.shape, self.position)
    }

    /// Shift one column; `direction` is -1 (left) or +1 (right).
    pub fn try_move(&mut self, board: &Board, direction: i32) -> bool {
        let target = self.position.offset(direction, 0);
        if collides(board, &self.shape, target) {
            return false;
        }
        self.position = target;
        true
    }

    /// Rotate clockwise, nudging sideways if the rotated shape collides.
    ///
    /// Offsets are applied cumulatively as +1, -2, +3, -4, ... Once the next
    /// offset would exceed the rotated shape's width the rotation is abandoned
    /// and the piece keeps its original shape and column.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let rotated = self.shape.rotated_clockwise();
        let limit = rotated.width() as i32;
        let mut x = self.position.x;
        let mut offset: i32 = 1;

        while collides(board, &rotated, Position::new(x, self.position.y)) {
            x += offset;
            offset = -(offset + offset.signum());
            if offset > limit {
                return false;
            }
        }

        self.shape = rotated;
        self.position.x = x;
        true
    }

    /// Move down one row if the row below is free.
    pub fn step_down(&mut self, board: &Board) -> DropOutcome {
        let target = self.position.offset(0, 1);
        if collides(board, &self.shape, target) {
            return DropOutcome::Landed;
        }
        self.position = target;
        DropOutcome::Moved
    }

    /// Lowest row the piece can reach by falling straight down
    pub fn landing_position(&self, board: &Board) -> Position {
        let mut landing = self.position;
        while !collides(board, &self.shape, landing.offset(0, 1)) {
            landing = landing.offset(0, 1);
        }
        landing
    }

    /// Fall straight down in one step; returns the number of rows dropped.
    pub fn drop_to_floor(&mut self, board: &Board) -> u32 {
        let landing = self.landing_position(board);
        let rows = (landing.y - self.position.y) as u32;
        self.position = landing;
        rows
    }

    /// Stash the active shape, once per spawned piece.
    ///
    /// With nothing held, the queued shape becomes active and `fresh` is
    /// queued; otherwise active and held swap. The new active shape starts at
    /// the spawn position. Collisions are not checked here.
    pub fn hold(&mut self, board_width: usize, fresh: impl FnOnce() -> Shape) -> bool {
        if self.hold_used {
            return false;
        }

        let incoming = match self.held.take() {
            Some(held) => held,
            None => std::mem::replace(&mut self.next, fresh()),
        };
        let outgoing = std::mem::replace(&mut self.shape, incoming);
        self.held = Some(outgoing);
        self.position = spawn_position(board_width, &self.shape);
        self.hold_used = true;
        true
    }

    /// Write the piece into the board at its current position.
    pub fn lock_into(&self, board: &mut Board) {
        board.merge(&self.shape, self.position);
    }
}
