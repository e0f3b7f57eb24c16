//! Serializable view of a game for renderers and tooling.

use crate::board::SymbolGrid;
use crate::movegen::CheckState;
use crate::{Game, LastMove};
use chessboard_core::{Color, Square};
use serde::{Deserialize, Serialize};

/// Legal destinations of one origin square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMoveEntry {
    pub from: Square,
    pub to: Vec<Square>,
}

/// Everything a user interface reads from the engine, as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Symbol grid, row 0 first.
    pub board: SymbolGrid,
    pub turn: Color,
    pub check: CheckState,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_move: Option<LastMove>,
    pub legal_moves: Vec<LegalMoveEntry>,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        GameSnapshot {
            board: game.board(),
            turn: game.turn(),
            check: game.check_state(),
            last_move: game.last_move().copied(),
            legal_moves: game
                .legal_moves()
                .iter()
                .map(|(from, to)| LegalMoveEntry {
                    from,
                    to: to.to_vec(),
                })
                .collect(),
        }
    }
}
