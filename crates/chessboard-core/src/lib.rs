//! Core types for the chessboard rules engine.
//!
//! This crate provides the piece model used by the engine:
//! - [`Color`] for the two sides
//! - [`Square`] and [`Offset`] for board coordinates and movement vectors
//! - [`PieceKind`] and [`Piece`] for pieces, their symbols and their
//!   direction tables
//! - [`movement`] as the pure per-kind rule table lookup

mod color;
mod piece;
mod square;

pub use color::Color;
pub use piece::{
    movement, Movement, Piece, PieceKind, BISHOP_DIRECTIONS, BLACK_PAWN_OFFSETS,
    BLACK_PAWN_OFFSETS_MOVED, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
    WHITE_PAWN_OFFSETS, WHITE_PAWN_OFFSETS_MOVED,
};
pub use square::{Offset, Square, SquareError, BOARD_SIZE};
