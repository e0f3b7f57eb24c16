//! Leaf counting over the game tree.
//!
//! Walking every legal line to a fixed depth and counting the leaves gives
//! numbers that can be checked against published tables. Those tables assume
//! en passant and promotion, so only the first four plies from the start
//! position are comparable here.

use crate::Game;
use chessboard_core::Square;

/// Number of move sequences of length `depth` playable from `game`.
pub fn perft(game: &Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves();

    if depth == 1 {
        return moves.total_moves() as u64;
    }

    moves
        .pairs()
        .filter_map(|(from, to)| {
            let mut child = game.clone();
            child.make_move(from, to).ok()?;
            Some(perft(&child, depth - 1))
        })
        .sum()
}

/// Splits [`perft`] by first move, for locating a move generation bug.
pub fn perft_divide(game: &Game, depth: u32) -> Vec<((Square, Square), u64)> {
    let mut results = Vec::with_capacity(game.legal_moves().total_moves());

    for (from, to) in game.legal_moves().pairs() {
        let mut child = game.clone();
        if child.make_move(from, to).is_err() {
            continue;
        }
        results.push(((from, to), perft(&child, depth.saturating_sub(1))));
    }

    results
}
