//! Attack projection and check detection.

use crate::Board;
use chessboard_core::{Color, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};

/// Whether a side's king is attacked, and where it stands if so.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckState {
    #[default]
    NotInCheck,
    InCheck(Square),
}

impl CheckState {
    #[inline]
    pub const fn is_in_check(self) -> bool {
        matches!(self, CheckState::InCheck(_))
    }

    /// Returns the checked king's square.
    #[inline]
    pub const fn king_square(self) -> Option<Square> {
        match self {
            CheckState::InCheck(sq) => Some(sq),
            CheckState::NotInCheck => None,
        }
    }
}

/// Returns true if `piece` standing on `from` attacks `target`.
///
/// Sliders walk each ray until the first occupied square; the other kinds
/// apply each offset once. Pawns only attack along their diagonal offsets.
/// Offsets that leave the board attack nothing.
pub fn attacks_square(board: &Board, from: Square, piece: &Piece, target: Square) -> bool {
    let movement = piece.movement();
    for &offset in movement.offsets {
        if piece.kind() == PieceKind::Pawn && offset.d_col == 0 {
            continue;
        }
        if !movement.sliding {
            if from.offset(offset) == Some(target) {
                return true;
            }
            continue;
        }
        let mut step = 1;
        while let Some(sq) = offset.scaled(step).and_then(|ray| from.offset(ray)) {
            if sq == target {
                return true;
            }
            if !board.is_empty(sq) {
                break;
            }
            step += 1;
        }
    }
    false
}

/// Returns true if any piece of `by_color` attacks `sq`.
pub fn is_square_attacked(board: &Board, sq: Square, by_color: Color) -> bool {
    board
        .pieces_of(by_color)
        .any(|(from, piece)| attacks_square(board, from, piece, sq))
}

/// Computes whether `color`'s king is attacked, without touching any state.
pub fn check_state(board: &Board, color: Color) -> CheckState {
    match board.king_square(color) {
        Some(king) if is_square_attacked(board, king, color.opposite()) => {
            CheckState::InCheck(king)
        }
        _ => CheckState::NotInCheck,
    }
}

/// Returns true if the king of the given color is in check.
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    check_state(board, color).is_in_check()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn standard_position_has_no_check() {
        let board = Board::standard();
        assert_eq!(check_state(&board, Color::White), CheckState::NotInCheck);
        assert_eq!(check_state(&board, Color::Black), CheckState::NotInCheck);
    }

    #[test]
    fn pawns_cover_the_row_in_front() {
        let board = Board::standard();
        // White pawns on row 6 attack every square of row 5.
        for col in 0..8 {
            assert!(is_square_attacked(&board, sq(5, col), Color::White));
        }
        assert!(!is_square_attacked(&board, sq(4, 4), Color::White));
    }

    #[test]
    fn pawn_forward_step_is_not_an_attack() {
        let mut board = Board::empty();
        board.put(sq(4, 4), Piece::pawn(Color::White));
        assert!(!is_square_attacked(&board, sq(3, 4), Color::White));
        assert!(!is_square_attacked(&board, sq(2, 4), Color::White));
        assert!(is_square_attacked(&board, sq(3, 3), Color::White));
        assert!(is_square_attacked(&board, sq(3, 5), Color::White));
        assert!(!is_square_attacked(&board, sq(5, 3), Color::White));
    }

    #[test]
    fn black_pawn_attacks_downward() {
        let mut board = Board::empty();
        board.put(sq(1, 0), Piece::pawn(Color::Black));
        assert!(is_square_attacked(&board, sq(2, 1), Color::Black));
        assert!(!is_square_attacked(&board, sq(0, 1), Color::Black));
    }

    #[test]
    fn rook_on_open_rank_gives_check() {
        let mut board = Board::empty();
        board.put(sq(0, 4), Piece::king(Color::Black));
        board.put(sq(0, 0), Piece::rook(Color::White));
        board.put(sq(7, 7), Piece::king(Color::White));
        assert_eq!(
            check_state(&board, Color::Black),
            CheckState::InCheck(sq(0, 4))
        );
        assert!(!is_king_attacked(&board, Color::White));
    }

    #[test]
    fn blocked_ray_does_not_attack() {
        let mut board = Board::empty();
        board.put(sq(0, 4), Piece::king(Color::Black));
        board.put(sq(0, 0), Piece::rook(Color::White));
        board.put(sq(0, 2), Piece::knight(Color::Black));
        assert_eq!(check_state(&board, Color::Black), CheckState::NotInCheck);
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let mut board = Board::standard();
        board.put(sq(2, 3), Piece::knight(Color::White));
        assert!(is_king_attacked(&board, Color::Black));
    }

    #[test]
    fn bishop_and_queen_diagonals() {
        let mut board = Board::empty();
        board.put(sq(4, 4), Piece::bishop(Color::Black));
        assert!(is_square_attacked(&board, sq(7, 7), Color::Black));
        assert!(is_square_attacked(&board, sq(0, 0), Color::Black));
        assert!(!is_square_attacked(&board, sq(4, 7), Color::Black));

        board.put(sq(4, 4), Piece::queen(Color::Black));
        assert!(is_square_attacked(&board, sq(4, 7), Color::Black));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = Board::empty();
        assert_eq!(check_state(&board, Color::White), CheckState::NotInCheck);
    }

    #[test]
    fn check_state_accessors() {
        let state = CheckState::InCheck(sq(7, 4));
        assert!(state.is_in_check());
        assert_eq!(state.king_square(), Some(sq(7, 4)));
        assert_eq!(CheckState::default().king_square(), None);
    }
}
