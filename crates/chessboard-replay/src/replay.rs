//! Applies a [`ReplayScript`] to a fresh game.

use crate::script::{ReplayScript, ScriptMove};
use chessboard_engine::{Game, GameError};
use std::io::{self, Write};
use tracing::{info, warn};

/// A scripted move the engine refused.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Zero-based position in the script.
    pub index: usize,
    pub mv: ScriptMove,
    pub error: GameError,
}

/// Result of running a script.
#[derive(Debug)]
pub struct ReplayOutcome {
    pub game: Game,
    pub applied: usize,
    pub rejected: Vec<Rejection>,
    /// Set when the replay aborted at a rejected move.
    pub aborted: bool,
}

/// Runs every move of `script` against a new game, writing board diagrams
/// to `out` when the script asks for them.
///
/// `keep_going` overrides `stop_on_error`. Only I/O failures on `out` are
/// returned as errors; rejected moves are collected in the outcome.
pub fn run<W: Write>(
    script: &ReplayScript,
    keep_going: bool,
    out: &mut W,
) -> io::Result<ReplayOutcome> {
    let stop_on_error = script.settings.stop_on_error && !keep_going;
    let mut game = Game::new();
    let mut applied = 0;
    let mut rejected = Vec::new();
    let mut aborted = false;

    for (index, mv) in script.moves.iter().copied().enumerate() {
        let mover = game.turn();
        match game.make_move_coords(mv.from, mv.to) {
            Ok(()) => {
                applied += 1;
                info!(
                    index,
                    from = ?mv.from,
                    to = ?mv.to,
                    %mover,
                    check = ?game.check_state(),
                    "applied"
                );
                if script.settings.print_board {
                    writeln!(out, "{}. {} {:?} -> {:?}", index + 1, mover, mv.from, mv.to)?;
                    write!(out, "{}", game.pieces())?;
                    writeln!(out)?;
                }
            }
            Err(error) => {
                warn!(index, %error, "rejected");
                writeln!(out, "{}. {}: {}", index + 1, mover, error)?;
                rejected.push(Rejection { index, mv, error });
                if stop_on_error {
                    aborted = true;
                    break;
                }
            }
        }
    }

    Ok(ReplayOutcome {
        game,
        applied,
        rejected,
        aborted,
    })
}
