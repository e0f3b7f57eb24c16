//! Castling eligibility.

use super::attacks::is_king_attacked;
use super::simulate::is_position_safe;
use crate::Board;
use chessboard_core::{Offset, Piece, PieceKind, Square};

/// Column a king must stand on to castle.
pub const KING_HOME_COL: u8 = 4;

/// The two castling directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward column 7.
    KingSide,
    /// Toward column 0.
    QueenSide,
}

impl CastleSide {
    /// King side first, matching the order destinations are appended in.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column of the rook this side castles with.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column delta of one king step toward the rook.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// Square the king lands on when castling from `king`.
    pub const fn king_destination(self, king: Square) -> Option<Square> {
        king.offset(Offset::new(0, 2 * self.direction()))
    }

    /// Corner square holding this side's rook on the king's rank.
    pub const fn rook_origin(self, king: Square) -> Option<Square> {
        Square::new(king.row(), self.rook_col())
    }

    /// Square the rook lands on: the one the king passes over.
    pub const fn rook_destination(self, king: Square) -> Option<Square> {
        king.offset(Offset::new(0, self.direction()))
    }

    /// Recognizes a castling king move: a king travelling two columns
    /// along its rank.
    pub fn from_king_move(piece: &Piece, from: Square, to: Square) -> Option<Self> {
        if piece.kind() != PieceKind::King || from.row() != to.row() {
            return None;
        }
        match to.col() as i8 - from.col() as i8 {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

/// Returns true if the king on `king_sq` may castle toward `side`.
///
/// Requires an unmoved king on its home square, an unmoved rook of the same
/// color in the corner, no current check, an empty path between the two and
/// both squares the king travels over safe from attack.
pub fn can_castle(board: &mut Board, king_sq: Square, side: CastleSide) -> bool {
    let Some(king) = board.get(king_sq) else {
        return false;
    };
    let color = king.color();
    if king.kind() != PieceKind::King
        || king.moved()
        || king_sq.row() != color.back_rank()
        || king_sq.col() != KING_HOME_COL
    {
        return false;
    }

    let Some(rook_sq) = side.rook_origin(king_sq) else {
        return false;
    };
    match board.get(rook_sq) {
        Some(rook) if rook.kind() == PieceKind::Rook && rook.color() == color && !rook.moved() => {}
        _ => return false,
    }

    if is_king_attacked(board, color) {
        return false;
    }

    let (low, high) = if king_sq.col() < rook_sq.col() {
        (king_sq.col(), rook_sq.col())
    } else {
        (rook_sq.col(), king_sq.col())
    };
    let path_clear = (low + 1..high)
        .filter_map(|col| Square::new(king_sq.row(), col))
        .all(|sq| board.is_empty(sq));
    if !path_clear {
        return false;
    }

    (1..=2).all(|step| {
        king_sq
            .offset(Offset::new(0, step * side.direction()))
            .is_some_and(|transit| is_position_safe(board, king_sq, transit))
    })
}
