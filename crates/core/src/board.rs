//! Board module - the settled-block grid
//!
//! The board is a fixed `width x height` grid where each cell is empty or holds
//! the color id of a settled block. Cells are stored in a flat row-major vector.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! The board is only mutated through [`Board::merge`] and
//! [`Board::clear_completed_lines`]; dimensions never change after creation.

use crate::error::ConfigError;
use crate::shape::{Position, Shape};
use crate::types::{cell, Cell, BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_SIDE};

/// The game board using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Cell count of a `width x height` board, if both sides are in
/// `1..=MAX_BOARD_SIDE`.
pub fn check_dimensions(width: usize, height: usize) -> Result<usize, ConfigError> {
    let in_range = |side: usize| (1..=MAX_BOARD_SIDE).contains(&side);
    if !in_range(width) || !in_range(height) {
        return Err(ConfigError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(ConfigError::InvalidDimensions { width, height })
}

impl Board {
    /// Create an empty board. Both dimensions must be in `1..=MAX_BOARD_SIDE`.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        let len = check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![None; len],
        })
    }

    /// Build a board from raw rows where `0` means empty.
    ///
    /// All rows must have the same length, within the same bounds as
    /// [`Board::new`].
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        check_dimensions(width, height)?;
        if rows.iter().any(|row| row.len() != width) {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|&raw| cell(raw)))
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (x, y), `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_row_complete(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|c| c.is_some()))
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Write every filled cell of `shape` at `cell + position`.
    ///
    /// The caller must have checked for collisions first. Cells that land
    /// outside the grid (e.g. above row 0) are dropped.
    pub fn merge(&mut self, shape: &Shape, position: Position) {
        for (dx, dy, color) in shape.filled() {
            if let Some(idx) = self.index(position.x + dx, position.y + dy) {
                self.cells[idx] = Some(color);
            }
        }
    }

    /// Remove every complete row and pad the top with empty rows.
    ///
    /// Returns the number of rows removed. Remaining rows keep their relative
    /// order, so a row that drops into the index of a removed row is judged
    /// on its own contents like every other row.
    pub fn clear_completed_lines(&mut self) -> usize {
        let kept: Vec<Cell> = self
            .cells
            .chunks(self.width)
            .filter(|row| row.iter().any(|c| c.is_none()))
            .flatten()
            .copied()
            .collect();

        let cleared = self.height - kept.len() / self.width;
        if cleared == 0 {
            return 0;
        }

        let mut cells = vec![None; cleared * self.width];
        cells.extend(kept);
        self.cells = cells;
        cleared
    }

    /// Empty every cell, keeping dimensions
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH as usize,
            height: BOARD_HEIGHT as usize,
            cells: vec![None; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Board::new(0, 20),
            Err(ConfigError::InvalidDimensions {
                width: 0,
                height: 20
            })
        );
        assert!(Board::new(10, 0).is_err());
        assert!(Board::from_rows(&[]).is_err());
        assert!(Board::from_rows(&[&[0, 0], &[0]]).is_err());
    }

    #[test]
    fn test_rejects_oversized_dimensions() {
        assert!(Board::new(MAX_BOARD_SIDE, MAX_BOARD_SIDE).is_ok());
        assert_eq!(
            Board::new(MAX_BOARD_SIDE + 1, 2),
            Err(ConfigError::InvalidDimensions {
                width: MAX_BOARD_SIDE + 1,
                height: 2
            })
        );
        assert!(Board::new(10, 40_000).is_err());
        assert!(Board::new(usize::MAX / 2 + 1, 2).is_err());

        let wide = vec![1u8; MAX_BOARD_SIDE + 1];
        assert!(Board::from_rows(&[wide.as_slice()]).is_err());
    }

    #[test]
    fn test_clear_keeps_order_of_remaining_rows() {
        let mut board = Board::from_rows(&[
            &[0, 0, 0],
            &[1, 0, 0],
            &[2, 2, 2],
            &[0, 3, 0],
            &[4, 4, 4],
        ])
        .unwrap();

        assert_eq!(board.clear_completed_lines(), 2);

        let expected = Board::from_rows(&[
            &[0, 0, 0],
            &[0, 0, 0],
            &[0, 0, 0],
            &[1, 0, 0],
            &[0, 3, 0],
        ])
        .unwrap();
        assert_eq!(board, expected);
    }

    #[test]
    fn test_adjacent_complete_rows_all_clear() {
        let mut board = Board::from_rows(&[&[0, 5], &[1, 1], &[2, 2], &[3, 3]]).unwrap();
        assert_eq!(board.clear_completed_lines(), 3);
        assert_eq!(board.row(3), Some(&[None, cell(5)][..]));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_merge_skips_cells_above_top() {
        let mut board = Board::new(4, 4).unwrap();
        let shape = Shape::from_rows(&[&[1, 1], &[1, 1]]).unwrap();
        board.merge(&shape, Position::new(1, -1));
        assert_eq!(board.occupied_count(), 2);
        assert!(board.is_occupied(1, 0));
        assert!(board.is_occupied(2, 0));
    }
}
