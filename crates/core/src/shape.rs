//! Shape module - piece grids, rotation, and collision
//!
//! A [`Shape`] is an immutable rectangular grid of cells, at most 4x4, stored
//! inline so that rotating a piece never allocates. Rotation always yields a
//! new value; catalog entries are cloned out and never modified.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{cell, Cell, ColorId, MAX_SHAPE_SIDE};

const SHAPE_CAPACITY: usize = MAX_SHAPE_SIDE * MAX_SHAPE_SIDE;

/// Grid offset of a shape's top-left cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// One rotation state of one piece kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    /// Row-major cells, `width * height` long
    cells: ArrayVec<Cell, SHAPE_CAPACITY>,
}

impl Shape {
    /// Build a shape from raw rows where `0` means empty.
    ///
    /// Rows must be non-empty, of equal length, at most 4x4, and contain at
    /// least one filled cell.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, &'static str> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if width == 0 {
            return Err("shape has no cells");
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err("rows differ in length");
        }
        if width > MAX_SHAPE_SIDE || height > MAX_SHAPE_SIDE {
            return Err("shape is larger than 4x4");
        }
        if rows.iter().all(|row| row.iter().all(|&raw| raw == 0)) {
            return Err("shape has no filled cell");
        }

        Ok(Self::from_rows_unchecked(rows))
    }

    /// Built-in data path; callers guarantee the rows are well formed.
    pub(crate) fn from_rows_unchecked(rows: &[&[u8]]) -> Self {
        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|&raw| cell(raw)))
            .collect();
        Self {
            width: rows.first().map_or(0, |row| row.len()) as u8,
            height: rows.len() as u8,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.cells[y * self.width() + x]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width())
    }

    /// Filled cells as `(dx, dy, color)` offsets from the top-left corner
    pub fn filled(&self) -> impl Iterator<Item = (i32, i32, ColorId)> + '_ {
        let width = self.width();
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            c.map(|color| ((i % width) as i32, (i / width) as i32, color))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Color of the first filled cell, used for previews
    pub fn color(&self) -> Option<ColorId> {
        self.cells.iter().find_map(|c| *c)
    }

    /// Clockwise quarter turn: transpose, then reverse each row.
    ///
    /// The bounding box swaps width and height for non-square shapes.
    pub fn rotated_clockwise(&self) -> Shape {
        let (w, h) = (self.width(), self.height());
        let mut cells = ArrayVec::new();
        for r in 0..w {
            for c in 0..h {
                cells.push(self.cells[(h - 1 - c) * w + r]);
            }
        }
        Shape {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

/// Pure clockwise rotation. Legality is not checked.
pub fn rotate_clockwise(shape: &Shape) -> Shape {
    shape.rotated_clockwise()
}

/// True iff a filled cell of `shape` at `position` lands left of, right of, or
/// below the board, or on an occupied cell.
///
/// Rows above the board (`y < 0`) are treated as absent and never collide, so
/// a piece may hang partly above the visible field. This includes cells that
/// are above the top *and* past a side wall: the above-the-top rule wins over
/// the horizontal bounds check. Kept deliberately for compatibility with the
/// established engine behavior rather than tightened.
pub fn collides(board: &Board, shape: &Shape, position: Position) -> bool {
    let width = board.width() as i32;
    let height = board.height() as i32;

    shape.filled().any(|(dx, dy, _)| {
        let x = position.x + dx;
        let y = position.y + dy;
        if y < 0 {
            return false;
        }
        x < 0 || x >= width || y >= height || board.is_occupied(x, y)
    })
}
