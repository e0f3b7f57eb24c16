//! Integration tests for the rules enforced by `Game`.

use chessboard_core::{Color, Piece, PieceKind, Square};
use chessboard_engine::{Board, CastleSide, CheckState, Game, GameError};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

/// Builds a game from `(row, col, piece)` placements.
fn game_with(pieces: Vec<(u8, u8, Piece)>, turn: Color) -> Game {
    let mut board = Board::empty();
    for (row, col, piece) in pieces {
        board.put(sq(row, col), piece);
    }
    Game::from_board(board, turn).expect("valid setup")
}

/// Kings and rooks on their home squares, nothing else.
fn castling_game() -> Game {
    let mut pieces = Vec::new();
    for color in Color::ALL {
        let row = color.back_rank();
        pieces.push((row, 0, Piece::rook(color)));
        pieces.push((row, 4, Piece::king(color)));
        pieces.push((row, 7, Piece::rook(color)));
    }
    game_with(pieces, Color::White)
}

#[test]
fn initial_layout() {
    let game = Game::new();
    let expected: [&str; 8] = [
        "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
        "RNBQKBNR",
    ];
    for (row, line) in expected.iter().enumerate() {
        let actual: String = game.board()[row]
            .iter()
            .map(|symbol| symbol.unwrap_or('.'))
            .collect();
        assert_eq!(&actual, line, "row {}", row);
    }
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.check_state(), CheckState::NotInCheck);
    assert_eq!(game.legal_moves().total_moves(), 20);
}

#[test]
fn turns_alternate() {
    let mut game = Game::new();
    let moves = [
        ((6, 4), (4, 4)),
        ((1, 4), (3, 4)),
        ((7, 6), (5, 5)),
        ((0, 1), (2, 2)),
    ];
    let mut expected = Color::White;
    for (from, to) in moves {
        assert_eq!(game.turn(), expected);
        game.make_move_coords(from, to).unwrap();
        expected = expected.opposite();
        assert_eq!(game.turn(), expected);
    }
}

#[test]
fn rejected_move_changes_nothing() {
    let mut game = Game::new();
    game.make_move(sq(6, 3), sq(4, 3)).unwrap();
    let before = game.snapshot();

    let err = game.make_move(sq(1, 4), sq(4, 4)).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidMove {
            from: (1, 4),
            to: (4, 4)
        }
    );
    assert!(game.make_move(sq(4, 4), sq(3, 4)).is_err());
    assert!(game.make_move(sq(4, 3), sq(3, 3)).is_err());

    assert_eq!(game.snapshot(), before);
    assert!(!game.pieces().get(sq(1, 4)).unwrap().moved());
}

#[test]
fn pinned_piece_has_no_legal_moves() {
    let game = game_with(
        vec![
            (7, 4, Piece::king(Color::White)),
            (6, 4, Piece::bishop(Color::White)),
            (2, 4, Piece::rook(Color::Black)),
            (0, 0, Piece::king(Color::Black)),
        ],
        Color::White,
    );
    assert!(game.legal_moves().get(sq(6, 4)).is_none());
    assert!(!game.legal_moves().contains(sq(6, 4), sq(5, 5)));
}

#[test]
fn king_in_check_must_respond() {
    let game = game_with(
        vec![
            (7, 4, Piece::king(Color::White)),
            (7, 0, Piece::rook(Color::White)),
            (6, 7, Piece::knight(Color::White)),
            (3, 4, Piece::rook(Color::Black)),
            (0, 7, Piece::king(Color::Black)),
        ],
        Color::White,
    );
    assert_eq!(game.check_state(), CheckState::InCheck(sq(7, 4)));

    for (from, to) in game.legal_moves().pairs() {
        let mut child = game.clone();
        child.make_move(from, to).unwrap();
        assert!(!child.probe_check(Color::White), "{} -> {} leaves check", from, to);
    }
    // Neither the rook nor the knight can reach the e-file between the pieces.
    assert!(game.legal_moves().get(sq(7, 0)).is_none());
    assert!(game.legal_moves_from(sq(6, 7)).is_empty());
    assert!(!game.legal_moves_from(sq(7, 4)).contains(&sq(6, 4)));
    assert!(game.legal_moves_from(sq(7, 4)).contains(&sq(7, 5)));
}

#[test]
fn check_detection_round_trip() {
    let mut game = game_with(
        vec![
            (7, 7, Piece::king(Color::White)),
            (5, 0, Piece::rook(Color::White)),
            (0, 4, Piece::king(Color::Black)),
            (1, 2, Piece::bishop(Color::Black)),
        ],
        Color::White,
    );

    // Rook lifts onto the king's rank with a clear path.
    game.make_move(sq(5, 0), sq(0, 0)).unwrap();
    assert_eq!(game.check_state(), CheckState::InCheck(sq(0, 4)));
    assert!(game.is_in_check(Color::Black, false));

    // Bishop interposes on the rank.
    game.make_move(sq(1, 2), sq(0, 1)).unwrap();
    assert_eq!(game.check_state(), CheckState::NotInCheck);
    assert!(!game.probe_check(Color::Black));
}

#[test]
fn castling_available_with_all_preconditions() {
    let game = castling_game();
    let king_moves = game.legal_moves_from(sq(7, 4));
    assert!(king_moves.contains(&sq(7, 6)));
    assert!(king_moves.contains(&sq(7, 2)));
}

#[test]
fn castling_king_side_moves_the_rook() {
    let mut game = castling_game();
    game.make_move(sq(7, 4), sq(7, 6)).unwrap();

    let board = game.pieces();
    assert_eq!(board.get(sq(7, 6)).map(Piece::kind), Some(PieceKind::King));
    assert_eq!(board.get(sq(7, 5)).map(Piece::kind), Some(PieceKind::Rook));
    assert!(board.is_empty(sq(7, 7)));
    assert!(board.is_empty(sq(7, 4)));
    assert!(board.get(sq(7, 5)).unwrap().moved());
    assert!(board.get(sq(7, 6)).unwrap().moved());
    assert_eq!(game.last_move().unwrap().symbol(), 'K');
}

#[test]
fn castling_queen_side_moves_the_rook() {
    let mut game = castling_game();
    game.make_move(sq(7, 4), sq(7, 2)).unwrap();

    // The relocated rook now covers d8, so Black keeps only the king side.
    let black_king = game.legal_moves_from(sq(0, 4));
    assert!(!black_king.contains(&sq(0, 2)));
    game.make_move(sq(0, 4), sq(0, 6)).unwrap();

    let board = game.pieces();
    assert_eq!(board.get(sq(7, 2)).map(Piece::symbol), Some('K'));
    assert_eq!(board.get(sq(7, 3)).map(Piece::symbol), Some('R'));
    assert_eq!(board.get(sq(0, 5)).map(Piece::symbol), Some('r'));
    assert!(board.is_empty(sq(7, 0)));
    assert!(board.is_empty(sq(0, 7)));
}

#[test]
fn moved_king_loses_castling() {
    let mut game = castling_game();
    game.make_move(sq(7, 4), sq(7, 3)).unwrap();
    game.make_move(sq(0, 4), sq(0, 5)).unwrap();
    game.make_move(sq(7, 3), sq(7, 4)).unwrap();
    game.make_move(sq(0, 5), sq(0, 4)).unwrap();

    let king_moves = game.legal_moves_from(sq(7, 4));
    assert!(!king_moves.contains(&sq(7, 6)));
    assert!(!king_moves.contains(&sq(7, 2)));
    assert!(!game.can_castle(sq(7, 4), CastleSide::KingSide));
}

#[test]
fn moved_rook_loses_its_side() {
    let mut game = castling_game();
    game.make_move(sq(7, 7), sq(6, 7)).unwrap();
    game.make_move(sq(0, 0), sq(1, 0)).unwrap();
    game.make_move(sq(6, 7), sq(7, 7)).unwrap();
    game.make_move(sq(1, 0), sq(0, 0)).unwrap();

    let king_moves = game.legal_moves_from(sq(7, 4));
    assert!(!king_moves.contains(&sq(7, 6)));
    assert!(king_moves.contains(&sq(7, 2)));

    game.make_move(sq(7, 4), sq(7, 2)).unwrap();
    let black_king = game.legal_moves_from(sq(0, 4));
    assert!(black_king.contains(&sq(0, 6)));
    assert!(!black_king.contains(&sq(0, 2)));
}

#[test]
fn no_castling_while_in_check() {
    let mut pieces = vec![(4, 4, Piece::queen(Color::Black))];
    for color in Color::ALL {
        let row = color.back_rank();
        pieces.push((row, 0, Piece::rook(color)));
        pieces.push((row, 4, Piece::king(color)));
        pieces.push((row, 7, Piece::rook(color)));
    }
    let game = game_with(pieces, Color::White);

    assert!(game.check_state().is_in_check());
    let king_moves = game.legal_moves_from(sq(7, 4));
    assert!(!king_moves.contains(&sq(7, 6)));
    assert!(!king_moves.contains(&sq(7, 2)));
}

#[test]
fn no_castling_through_occupied_or_attacked_squares() {
    let mut pieces = vec![
        (7, 1, Piece::knight(Color::White)),
        (2, 5, Piece::rook(Color::Black)),
    ];
    for color in Color::ALL {
        let row = color.back_rank();
        pieces.push((row, 0, Piece::rook(color)));
        pieces.push((row, 4, Piece::king(color)));
        pieces.push((row, 7, Piece::rook(color)));
    }
    let game = game_with(pieces, Color::White);

    let king_moves = game.legal_moves_from(sq(7, 4));
    // b-file knight blocks queen side, rook on the f-file covers king side.
    assert!(!king_moves.contains(&sq(7, 2)));
    assert!(!king_moves.contains(&sq(7, 6)));
}

#[test]
fn pawn_shape() {
    let mut game = Game::new();
    assert_eq!(game.legal_moves_from(sq(6, 2)), &[sq(5, 2), sq(4, 2)]);

    game.make_move(sq(6, 2), sq(5, 2)).unwrap();
    game.make_move(sq(1, 3), sq(3, 3)).unwrap();
    // Moved pawns step once; d5 is still two rows away.
    assert_eq!(game.legal_moves_from(sq(5, 2)), &[sq(4, 2)]);

    game.make_move(sq(5, 2), sq(4, 2)).unwrap();
    game.make_move(sq(1, 7), sq(2, 7)).unwrap();
    assert_eq!(game.legal_moves_from(sq(4, 2)), &[sq(3, 2), sq(3, 3)]);
}

#[test]
fn blocked_pawn_has_no_moves() {
    let mut game = Game::new();
    game.make_move(sq(6, 4), sq(4, 4)).unwrap();
    game.make_move(sq(1, 4), sq(3, 4)).unwrap();
    assert!(game.legal_moves().get(sq(4, 4)).is_none());
}

#[test]
fn capture_removes_the_piece() {
    let mut game = Game::new();
    game.make_move(sq(6, 4), sq(4, 4)).unwrap();
    game.make_move(sq(1, 3), sq(3, 3)).unwrap();
    game.make_move(sq(4, 4), sq(3, 3)).unwrap();

    assert_eq!(game.board()[3][3], Some('P'));
    assert_eq!(game.pieces().pieces_of(Color::Black).count(), 15);
    assert_eq!(game.pieces().occupied().count(), 31);
}
