//! Piece catalog - the fixed set of spawnable shapes
//!
//! The standard catalog holds the seven tetrominoes in their spawn
//! orientation. Color ids follow catalog order (T=1 .. Z=7).

use rand::Rng;

use crate::error::ConfigError;
use crate::shape::Shape;

const T_ROWS: &[&[u8]] = &[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]];
const O_ROWS: &[&[u8]] = &[&[2, 2], &[2, 2]];
const L_ROWS: &[&[u8]] = &[&[0, 3, 0], &[0, 3, 0], &[0, 3, 3]];
const J_ROWS: &[&[u8]] = &[&[0, 4, 0], &[0, 4, 0], &[4, 4, 0]];
const I_ROWS: &[&[u8]] = &[&[0, 5, 0, 0], &[0, 5, 0, 0], &[0, 5, 0, 0], &[0, 5, 0, 0]];
const S_ROWS: &[&[u8]] = &[&[0, 6, 6], &[6, 6, 0], &[0, 0, 0]];
const Z_ROWS: &[&[u8]] = &[&[7, 7, 0], &[0, 7, 7], &[0, 0, 0]];

/// Spawn-orientation grids of the standard tetrominoes
pub const STANDARD_PIECES: [&[&[u8]]; 7] =
    [T_ROWS, O_ROWS, L_ROWS, J_ROWS, I_ROWS, S_ROWS, Z_ROWS];

/// Letters for the standard color ids, index = id - 1
pub const STANDARD_LETTERS: [char; 7] = ['T', 'O', 'L', 'J', 'I', 'S', 'Z'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    shapes: Vec<Shape>,
}

impl Catalog {
    /// Build a catalog from validated shapes. Must not be empty.
    pub fn new(shapes: Vec<Shape>) -> Result<Self, ConfigError> {
        if shapes.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self { shapes })
    }

    /// Build a catalog from raw grids, validating every entry.
    pub fn from_rows(pieces: &[&[&[u8]]]) -> Result<Self, ConfigError> {
        let shapes = pieces
            .iter()
            .enumerate()
            .map(|(index, rows)| {
                Shape::from_rows(rows).map_err(|reason| ConfigError::InvalidShape { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(shapes)
    }

    /// The seven standard tetrominoes
    pub fn standard() -> Self {
        Self {
            shapes: STANDARD_PIECES
                .iter()
                .map(|rows| Shape::from_rows_unchecked(rows))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Uniform pick. Consecutive picks may repeat.
    pub fn random_shape<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
        let index = rng.random_range(0..self.shapes.len());
        self.shapes[index].clone()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
