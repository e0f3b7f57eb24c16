//! The 8x8 piece grid.

use chessboard_core::{Color, Piece, PieceKind, Square, BOARD_SIZE};
use std::fmt;

/// Symbol grid handed to renderers, row 0 first.
pub type SymbolGrid = [[Option<char>; 8]; 8];

/// An 8x8 grid of optional pieces.
///
/// Each square owns the piece standing on it. Relocating a piece moves it
/// out of one square and into another; pieces are never duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the standard starting arrangement.
    ///
    /// Black occupies rows 0 and 1, White rows 6 and 7.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let home = color.back_rank();
            let pawn_row = (home as i8 + color.pawn_direction()) as u8;
            for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                let col = col as u8;
                if let Some(sq) = Square::new(home, col) {
                    board.put(sq, Piece::new(kind, color));
                }
                if let Some(sq) = Square::new(pawn_row, col) {
                    board.put(sq, Piece::pawn(color));
                }
            }
        }
        board
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<&Piece> {
        let (row, col) = sq.coords();
        self.squares[row][col].as_ref()
    }

    /// Returns true if `sq` holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Returns true if `sq` holds a piece of `color`.
    #[inline]
    pub fn is_occupied_by(&self, sq: Square, color: Color) -> bool {
        self.get(sq).is_some_and(|p| p.color() == color)
    }

    /// Places `piece` on `sq`, returning whatever stood there before.
    pub fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.replace(sq, Some(piece))
    }

    /// Takes the piece off `sq`.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.replace(sq, None)
    }

    /// Sets the contents of `sq`, returning the previous contents.
    pub(crate) fn replace(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        let (row, col) = sq.coords();
        std::mem::replace(&mut self.squares[row][col], piece)
    }

    /// Iterates over occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Iterates over the squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color() == color)
    }

    /// Returns the square of `color`'s king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Counts the kings of `color` on the board.
    pub fn king_count(&self, color: Color) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind() == PieceKind::King)
            .count()
    }

    /// Returns the display symbol of every square.
    pub fn symbols(&self) -> SymbolGrid {
        let mut grid = [[None; 8]; 8];
        for (sq, piece) in self.occupied() {
            let (row, col) = sq.coords();
            grid[row][col] = Some(piece.symbol());
        }
        grid
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, symbols) in self.symbols().iter().enumerate() {
            for symbol in symbols {
                write!(f, "{}", symbol.unwrap_or('.'))?;
            }
            if row + 1 < BOARD_SIZE as usize {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
