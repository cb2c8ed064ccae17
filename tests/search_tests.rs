//! Search tests to verify the engine finds correct moves in various positions.

use std::sync::atomic::AtomicBool;

use chessgame::search::{MoveOrdering, MoveSource, INFINITY};
use chessgame::{best_move, Color, Game, Move, PieceKind, Search, SearchParams};

fn params() -> SearchParams {
    SearchParams {
        use_book: false,
        ..SearchParams::default()
    }
}

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

/// Test that the engine takes a free piece
#[test]
fn captures_undefended_rook() {
    let game = Game::try_from_fen("4k3/8/8/8/4r3/8/8/4R1K1 w - - 0 1").unwrap();
    let best = Search::new(params()).best_move(&game, 2);
    assert_eq!(best, Some(mv("e1e4")));
}

/// The default search must not play a book move in a set-up position
#[test]
fn book_is_skipped_for_fen_positions() {
    let game = Game::try_from_fen("6k1/5ppp/8/8/8/8/4P3/R5K1 w - - 0 1").unwrap();
    assert_eq!(best_move(&game, 2), Some(mv("a1a8")));

    let stop = AtomicBool::new(false);
    let result = Search::default().run(&game, 2, &stop).unwrap();
    assert_eq!(result.source, MoveSource::Search);
}

/// Test that the engine does not hang its queen
#[test]
fn avoids_giving_away_queen() {
    // d5 is covered by the e6 pawn, d7 and d8 by the black king
    let game = Game::try_from_fen("4k3/8/4p3/8/8/8/3Q4/4K3 w - - 0 1").unwrap();
    let best = Search::new(params()).best_move(&game, 2).unwrap();
    for blunder in ["d2d5", "d2d7", "d2d8"] {
        assert_ne!(best, mv(blunder));
    }
}

/// Test that a black root picks the move best for Black
#[test]
fn black_takes_white_queen() {
    let game = Game::try_from_fen("4k3/8/8/8/8/8/1q6/Q3K3 b - - 0 1").unwrap();
    let best = Search::new(params()).best_move(&game, 2).unwrap();
    assert_eq!(best, mv("b2a1"));
    let mut child = game.clone();
    child.play(best).unwrap();
    assert_eq!(child.board().count(PieceKind::Queen, Color::White), 0);
}

/// Every move ordering policy reaches the same decision
#[test]
fn ordering_does_not_change_result() {
    let game = Game::try_from_fen("r3k3/ppp2ppp/2n5/3qp3/3P4/2N2N2/PPP2PPP/R2QK3 w - - 0 1")
        .unwrap();
    let stop = AtomicBool::new(false);
    let mut results = Vec::new();
    for ordering in [
        MoveOrdering::Natural,
        MoveOrdering::CapturesFirst,
        MoveOrdering::MvvLva,
    ] {
        let mut search = Search::new(SearchParams {
            ordering,
            ..params()
        });
        let result = search.run(&game, 3, &stop).unwrap();
        results.push(result.score);
    }
    assert!(results.windows(2).all(|w| w[0] == w[1]), "{results:?}");
}

/// The free function searches with the book enabled
#[test]
fn free_best_move_uses_book() {
    let mut game = Game::new();
    for text in ["e2e4", "c7c5"] {
        let mv = game.parse_move(text).unwrap();
        game.play(mv).unwrap();
    }
    assert_eq!(best_move(&game, 3), Some(mv("g1f3")));

    let mut search = Search::default();
    let stop = AtomicBool::new(false);
    let result = search.run(&game, 3, &stop).unwrap();
    assert_eq!(result.source, MoveSource::Book);
}

/// Scores stay inside the search window
#[test]
fn scores_are_bounded() {
    let game = Game::try_from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let stop = AtomicBool::new(false);
    let result = Search::new(params()).run(&game, 3, &stop).unwrap();
    let score = result.score.unwrap();
    assert!(score > 0 && score < INFINITY);
}

/// Playing engine moves against itself keeps the game consistent
#[test]
fn self_play_stays_legal() {
    let mut game = Game::new();
    let mut search = Search::new(SearchParams::default());
    for _ in 0..12 {
        let Some(mv) = search.best_move(&game, 1) else {
            break;
        };
        assert!(game.is_legal(mv));
        game.play(mv).unwrap();
    }
    assert!(game.history().len() >= 12 || game.is_game_over());
}
