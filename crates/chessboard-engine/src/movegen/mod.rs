//! Move generation.
//!
//! This module provides legal move enumeration by projecting each piece's
//! direction table over the board, filtering candidates through a
//! simulate-and-revert check-safety probe, and appending castling
//! destinations for kings.

mod attacks;
mod castling;
pub mod perft;
mod simulate;

use crate::Board;
use chessboard_core::{Color, Offset, Piece, PieceKind, Square};
use std::collections::BTreeMap;

pub use attacks::{attacks_square, check_state, is_king_attacked, is_square_attacked, CheckState};
pub use castling::{can_castle, CastleSide, KING_HOME_COL};
pub use simulate::is_position_safe;

/// Legal destinations for every square of the side to move.
///
/// Origins iterate in row-major order. A square with no legal destination
/// is never a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoveMap {
    moves: BTreeMap<Square, Vec<Square>>,
}

impl LegalMoveMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the destinations of `from`. Empty lists are dropped.
    pub fn insert(&mut self, from: Square, destinations: Vec<Square>) {
        if destinations.is_empty() {
            self.moves.remove(&from);
        } else {
            self.moves.insert(from, destinations);
        }
    }

    /// Returns the destinations of `from`, if it has any.
    pub fn get(&self, from: Square) -> Option<&[Square]> {
        self.moves.get(&from).map(Vec::as_slice)
    }

    /// Returns true if `from` -> `to` is legal.
    pub fn contains(&self, from: Square, to: Square) -> bool {
        self.get(from).is_some_and(|destinations| destinations.contains(&to))
    }

    /// Number of squares that have at least one legal destination.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the side to move has no legal move at all.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Total number of legal (origin, destination) pairs.
    pub fn total_moves(&self) -> usize {
        self.moves.values().map(Vec::len).sum()
    }

    /// Iterates over origins and their destinations.
    pub fn iter(&self) -> impl Iterator<Item = (Square, &[Square])> + '_ {
        self.moves.iter().map(|(&from, to)| (from, to.as_slice()))
    }

    /// Iterates over every legal (origin, destination) pair.
    pub fn pairs(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.iter()
            .flat_map(|(from, destinations)| destinations.iter().map(move |&to| (from, to)))
    }
}

/// Enumerates every legal move of `color`.
///
/// The board is mutated while candidates are probed and is always left as
/// it was found.
pub fn find_legal_moves(board: &mut Board, color: Color) -> LegalMoveMap {
    let origins: Vec<(Square, bool)> = board
        .pieces_of(color)
        .map(|(sq, piece)| (sq, piece.kind() == PieceKind::King))
        .collect();

    let mut map = LegalMoveMap::new();
    for (from, is_king) in origins {
        let mut destinations = candidate_destinations(board, from);
        destinations.retain(|&to| is_position_safe(board, from, to));

        if is_king {
            for side in CastleSide::ALL {
                if can_castle(board, from, side) {
                    destinations.extend(side.king_destination(from));
                }
            }
        }

        map.insert(from, destinations);
    }
    map
}

/// Destinations the piece on `from` could reach by its movement geometry,
/// before the check-safety filter.
pub fn candidate_destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };
    let color = piece.color();
    let movement = piece.movement();
    let mut destinations = Vec::new();

    for &offset in movement.offsets {
        if movement.sliding {
            let mut step = 1;
            while let Some(to) = offset.scaled(step).and_then(|ray| from.offset(ray)) {
                match board.get(to) {
                    None => destinations.push(to),
                    Some(other) => {
                        if other.color() != color {
                            destinations.push(to);
                        }
                        break;
                    }
                }
                step += 1;
            }
            continue;
        }

        let Some(to) = from.offset(offset) else {
            continue;
        };
        if board.is_occupied_by(to, color) {
            continue;
        }
        if piece.kind() == PieceKind::Pawn && !pawn_step_allowed(board, piece, from, offset, to) {
            continue;
        }
        destinations.push(to);
    }
    destinations
}

/// Pawn shape rules: straight steps need empty squares (and an unmoved pawn
/// for the double step), diagonal steps need an enemy to capture.
fn pawn_step_allowed(board: &Board, pawn: &Piece, from: Square, offset: Offset, to: Square) -> bool {
    if offset.d_col != 0 {
        return board.is_occupied_by(to, pawn.color().opposite());
    }
    if !board.is_empty(to) {
        return false;
    }
    if offset.d_row.abs() == 2 {
        let passed = from.offset(Offset::new(offset.d_row / 2, 0));
        return !pawn.moved() && passed.is_some_and(|sq| board.is_empty(sq));
    }
    true
}
