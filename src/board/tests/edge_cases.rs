//! Edge case tests for special positions.

use crate::board::{Board, BoardBuilder, Color, Move, Piece, PieceKind, Square, PROMOTION_KINDS};
use crate::game::{Game, GameStatus};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn test_stalemate_position() {
    let game = Game::try_from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(game.is_game_over());
    assert!(!game.in_check(Color::Black));
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert!(game.legal_moves().is_empty());
}

#[test]
fn test_back_rank_mate() {
    let game = Game::try_from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert!(game.is_game_over());
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn test_underpromotion_to_knight() {
    let mut game = Game::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let mv = game.parse_move("a7a8n").unwrap();
    assert_eq!(mv.promotion, Some(PieceKind::Knight));
    game.play(mv).unwrap();
    assert_eq!(
        game.board().piece_at(sq("a8")),
        Some(Piece::new(PieceKind::Knight, Color::White))
    );
}

#[test]
fn test_every_promotion_choice() {
    let start = Game::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    for kind in PROMOTION_KINDS {
        let mut game = start.clone();
        game.apply_move(sq("a7"), sq("a8"), Some(kind));
        assert_eq!(
            game.board().piece_at(sq("a8")),
            Some(Piece::new(kind, Color::White))
        );
    }
}

#[test]
fn test_promotion_by_capture() {
    let mut game = Game::try_from_fen("1r5k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
    assert!(game.is_capture(sq("b8")));
    assert!(game.is_promotion(sq("a7"), sq("b8")));
    game.apply_move(sq("a7"), sq("b8"), Some(PieceKind::Rook));
    assert_eq!(
        game.board().piece_at(sq("b8")),
        Some(Piece::new(PieceKind::Rook, Color::White))
    );
    assert_eq!(game.board().count(PieceKind::Rook, Color::Black), 0);
}

#[test]
fn test_no_castling_moves() {
    let game = Game::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert!(!game.is_legal(Move::new(sq("e1"), sq("g1"))));
    assert!(!game.is_legal(Move::new(sq("e1"), sq("c1"))));
}

#[test]
fn test_check_must_be_answered() {
    // Black rook checks along the first rank; every reply must resolve it
    let game = Game::try_from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").unwrap();
    assert!(game.in_check(Color::White));
    for mv in game.legal_moves() {
        let mut board: Board = game.board().clone();
        board.relocate(mv.from, mv.to);
        assert!(!board.in_check(Color::White), "{mv} leaves the king in check");
    }
    assert!(!game.is_legal(Move::new(sq("e1"), sq("f1"))));
    assert!(game.is_legal(Move::new(sq("e1"), sq("e2"))));
}

#[test]
fn test_kings_cannot_touch() {
    let game = BoardBuilder::new()
        .piece(sq("e4"), Color::White, PieceKind::King)
        .piece(sq("e6"), Color::Black, PieceKind::King)
        .build_game()
        .unwrap();
    for to in game.destinations_from(sq("e4")) {
        assert_ne!(to.row(), 3, "{to} is adjacent to the black king");
    }
    assert_eq!(game.destinations_from(sq("e4")).len(), 5);
}
