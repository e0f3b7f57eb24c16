//! Game state management.
//!
//! The [`Game`] struct owns the board and keeps the derived state in step
//! with it:
//! - the side to move
//! - the committed check state of the side to move
//! - the cached legal-move map of the side to move
//! - the last applied move

use crate::board::SymbolGrid;
use crate::movegen::{
    can_castle, check_state, find_legal_moves, is_position_safe, CastleSide, CheckState,
    LegalMoveMap,
};
use crate::snapshot::GameSnapshot;
use crate::Board;
use chessboard_core::{Color, PieceKind, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The destination is not among the legal destinations of the origin.
    ///
    /// Also covers empty or opposing origins and off-board coordinates.
    #[error("invalid move from {from:?} to {to:?}")]
    InvalidMove {
        from: (usize, usize),
        to: (usize, usize),
    },
    /// A custom position breaks a board invariant.
    #[error("invalid setup: {0}")]
    InvalidSetup(String),
}

/// The most recently applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    pub kind: PieceKind,
    pub color: Color,
    pub from: Square,
    pub to: Square,
}

impl LastMove {
    /// Symbol of the piece that moved.
    pub const fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }
}

/// A chess game: the board plus turn, check and legal-move bookkeeping.
///
/// Every mutating operation takes `&mut self`, so the board cannot be
/// observed while a hypothetical move is being probed.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    check: CheckState,
    last_move: Option<LastMove>,
    legal_moves: LegalMoveMap,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position, White to move.
    pub fn new() -> Self {
        Self::start(Board::standard(), Color::White)
    }

    /// Creates a game from a custom position.
    ///
    /// The board must hold exactly one king per color, and the side that
    /// just moved must not be left in check.
    pub fn from_board(board: Board, turn: Color) -> Result<Self, GameError> {
        for color in Color::ALL {
            let kings = board.king_count(color);
            if kings != 1 {
                return Err(GameError::InvalidSetup(format!(
                    "{} has {} kings, expected 1",
                    color, kings
                )));
            }
        }
        if check_state(&board, turn.opposite()).is_in_check() {
            return Err(GameError::InvalidSetup(format!(
                "{} is in check but it is {}'s turn",
                turn.opposite(),
                turn
            )));
        }
        Ok(Self::start(board, turn))
    }

    fn start(board: Board, turn: Color) -> Self {
        let mut game = Game {
            board,
            turn,
            check: CheckState::NotInCheck,
            last_move: None,
            legal_moves: LegalMoveMap::new(),
        };
        game.is_in_check(turn, true);
        game.find_legal_moves();
        game
    }

    /// Returns the symbol of every square, row 0 first.
    pub fn board(&self) -> SymbolGrid {
        self.board.symbols()
    }

    /// Returns the board for typed, read-only access.
    pub fn pieces(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the committed check state of the side to move.
    pub fn check_state(&self) -> CheckState {
        self.check
    }

    /// Returns the last applied move, if any.
    pub fn last_move(&self) -> Option<&LastMove> {
        self.last_move.as_ref()
    }

    /// Returns the cached legal moves of the side to move.
    pub fn legal_moves(&self) -> &LegalMoveMap {
        &self.legal_moves
    }

    /// Returns the legal destinations of `from`; empty when there are none.
    pub fn legal_moves_from(&self, from: Square) -> &[Square] {
        self.legal_moves.get(from).unwrap_or(&[])
    }

    /// Returns true if `color`'s king is attacked, without recording it.
    pub fn probe_check(&self, color: Color) -> bool {
        check_state(&self.board, color).is_in_check()
    }

    /// Returns true if `color`'s king is attacked.
    ///
    /// With `commit` set the result also replaces the stored check state,
    /// including a reset to [`CheckState::NotInCheck`].
    pub fn is_in_check(&mut self, color: Color, commit: bool) -> bool {
        let state = check_state(&self.board, color);
        if commit {
            if let CheckState::InCheck(king) = state {
                debug!(%color, %king, "king in check");
            }
            self.check = state;
        }
        state.is_in_check()
    }

    /// Rebuilds the legal-move map for the side to move.
    pub fn find_legal_moves(&mut self) -> &LegalMoveMap {
        self.legal_moves = find_legal_moves(&mut self.board, self.turn);
        trace!(
            turn = %self.turn,
            origins = self.legal_moves.len(),
            moves = self.legal_moves.total_moves(),
            "legal moves rebuilt"
        );
        &self.legal_moves
    }

    /// Returns true if moving the piece on `from` to `to` keeps its king safe.
    pub fn is_position_safe(&mut self, from: Square, to: Square) -> bool {
        is_position_safe(&mut self.board, from, to)
    }

    /// Returns true if the king on `king` may castle toward `side`.
    pub fn can_castle(&mut self, king: Square, side: CastleSide) -> bool {
        can_castle(&mut self.board, king, side)
    }

    /// Applies a move given as raw `(row, col)` coordinates.
    pub fn make_move_coords(
        &mut self,
        from: (usize, usize),
        to: (usize, usize),
    ) -> Result<(), GameError> {
        match (Square::try_from(from), Square::try_from(to)) {
            (Ok(from), Ok(to)) => self.make_move(from, to),
            _ => {
                debug!(?from, ?to, "rejected off-board move");
                Err(GameError::InvalidMove { from, to })
            }
        }
    }

    /// Applies a legal move for the side to move.
    ///
    /// A king moving two columns castles and brings the rook along. On error
    /// nothing changes.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<(), GameError> {
        let invalid = GameError::InvalidMove {
            from: from.coords(),
            to: to.coords(),
        };
        if !self.legal_moves.contains(from, to) {
            debug!(%from, %to, turn = %self.turn, "rejected move");
            return Err(invalid);
        }
        let Some(mut piece) = self.board.remove(from) else {
            return Err(invalid);
        };

        let castle = CastleSide::from_king_move(&piece, from, to);
        let (kind, color) = (piece.kind(), piece.color());
        piece.mark_moved();
        let captured = self.board.put(to, piece);

        if let Some(side) = castle {
            self.move_castling_rook(from, side);
        }

        debug!(
            piece = %kind,
            %color,
            %from,
            %to,
            captured = ?captured.map(|p| p.kind()),
            castle = ?castle,
            "move applied"
        );

        self.last_move = Some(LastMove {
            kind,
            color,
            from,
            to,
        });
        self.turn = self.turn.opposite();
        self.is_in_check(self.turn, true);
        self.find_legal_moves();
        Ok(())
    }

    fn move_castling_rook(&mut self, king_from: Square, side: CastleSide) {
        let (Some(origin), Some(destination)) =
            (side.rook_origin(king_from), side.rook_destination(king_from))
        else {
            return;
        };
        if let Some(mut rook) = self.board.remove(origin) {
            rook.mark_moved();
            self.board.put(destination, rook);
        }
    }

    /// Returns a serializable copy of the externally visible state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}
