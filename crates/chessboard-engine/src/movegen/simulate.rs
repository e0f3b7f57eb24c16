//! Hypothetical moves for check-safety probing.

use super::attacks::is_king_attacked;
use crate::Board;
use chessboard_core::{Piece, Square};
use std::ops::Deref;

/// A move applied to the board for the lifetime of the value.
///
/// Dropping the simulation puts the moved piece back on `from` and restores
/// whatever stood on `to`. The mutable borrow keeps anything else from
/// seeing the board while the hypothetical position is in place.
pub(crate) struct Simulation<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    displaced: Option<Piece>,
}

impl<'a> Simulation<'a> {
    /// Moves the piece on `from` to `to`. Returns `None` if `from` is empty.
    pub(crate) fn new(board: &'a mut Board, from: Square, to: Square) -> Option<Self> {
        let piece = board.remove(from)?;
        let displaced = board.replace(to, Some(piece));
        Some(Simulation {
            board,
            from,
            to,
            displaced,
        })
    }
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        let moved = self.board.replace(self.to, self.displaced.take());
        self.board.replace(self.from, moved);
    }
}

/// Returns true if moving the piece on `from` to `to` keeps its own king safe.
///
/// Moving onto a friendly piece, or from an empty square, is never safe.
pub fn is_position_safe(board: &mut Board, from: Square, to: Square) -> bool {
    let Some(color) = board.get(from).map(|piece| piece.color()) else {
        return false;
    };
    if board.is_occupied_by(to, color) {
        return false;
    }
    match Simulation::new(board, from, to) {
        Some(simulation) => !is_king_attacked(&simulation, color),
        None => false,
    }
}
