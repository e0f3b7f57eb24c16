//! Board coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Error returned when converting raw coordinates into a [`Square`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SquareError {
    #[error("coordinates ({row}, {col}) are outside the 8x8 board")]
    OutOfBounds { row: usize, col: usize },
}

/// A relative movement vector, in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub d_row: i8,
    pub d_col: i8,
}

impl Offset {
    #[inline]
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Offset { d_row, d_col }
    }

    /// Returns this vector multiplied by `factor`, or `None` on overflow.
    #[inline]
    pub const fn scaled(self, factor: i8) -> Option<Self> {
        match (self.d_row.checked_mul(factor), self.d_col.checked_mul(factor)) {
            (Some(d_row), Some(d_col)) => Some(Offset { d_row, d_col }),
            _ => None,
        }
    }

    /// Returns this vector with the row component negated.
    #[inline]
    pub const fn mirrored(self) -> Self {
        Offset {
            d_row: -self.d_row,
            d_col: self.d_col,
        }
    }
}

/// A square on the board, addressed by row and column.
///
/// Row 0 is Black's back rank and row 7 is White's. Squares order
/// row-major, which keeps legal-move maps in reading order.
///
/// Serialized as `{"row": r, "col": c}`; deserialization rejects
/// coordinates off the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSquare", into = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a [`Square`].
#[derive(Serialize, Deserialize)]
struct RawSquare {
    row: u8,
    col: u8,
}

impl TryFrom<RawSquare> for Square {
    type Error = SquareError;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::try_from((raw.row as usize, raw.col as usize))
    }
}

impl From<Square> for RawSquare {
    fn from(sq: Square) -> Self {
        RawSquare {
            row: sq.row,
            col: sq.col,
        }
    }
}

impl Square {
    /// Creates a square, or `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns `(row, col)` as plain indices.
    #[inline]
    pub const fn coords(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }

    /// Applies `offset`, returning `None` when the result leaves the board.
    #[inline]
    pub const fn offset(self, offset: Offset) -> Option<Self> {
        let (Some(row), Some(col)) = (
            (self.row as i8).checked_add(offset.d_row),
            (self.col as i8).checked_add(offset.d_col),
        ) else {
            return None;
        };
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        let size = BOARD_SIZE as usize;
        if row < size && col < size {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(SquareError::OutOfBounds { row, col })
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
