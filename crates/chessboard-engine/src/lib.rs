//! Chess rules engine over an 8x8 grid of pieces.
//!
//! This crate provides:
//! - [`Board`] - the grid of optional pieces, each owned by its square
//! - [`Game`] - turn, check state, last move and the cached legal-move map
//! - Legal move enumeration with a simulate-and-revert check-safety filter
//! - Check detection and castling eligibility
//! - [`GameSnapshot`] - a serializable view for user interfaces
//!
//! # Architecture
//!
//! Each piece carries a direction table. Sliding pieces repeat their
//! vectors until blocked; pawns, knights and kings apply them once. A
//! candidate move is legal when performing it on the board, temporarily,
//! leaves the mover's king unattacked.
//!
//! # Example
//!
//! ```
//! use chessboard_core::{Color, Square};
//! use chessboard_engine::{CheckState, Game};
//!
//! let mut game = Game::new();
//! println!("Legal moves from starting position: {}", game.legal_moves().total_moves());
//!
//! let e2 = Square::new(6, 4).unwrap();
//! let e4 = Square::new(4, 4).unwrap();
//! game.make_move(e2, e4).unwrap();
//!
//! assert_eq!(game.turn(), Color::Black);
//! assert_eq!(game.check_state(), CheckState::NotInCheck);
//! assert_eq!(game.board()[4][4], Some('P'));
//! ```

mod board;
mod game;
pub mod movegen;
mod snapshot;

pub use board::{Board, SymbolGrid};
pub use game::{Game, GameError, LastMove};
pub use movegen::{
    can_castle, check_state, find_legal_moves, is_king_attacked, is_position_safe,
    is_square_attacked, CastleSide, CheckState, LegalMoveMap,
};
pub use snapshot::{GameSnapshot, LegalMoveEntry};
