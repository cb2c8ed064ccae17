//! Background engine controller tests.

use chessgame::board::EngineError;
use chessgame::search::MoveSource;
use chessgame::{Difficulty, EngineController, Game, Move, SearchOutcome, SearchParams};

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

#[test]
fn book_reply_through_the_worker() {
    let mut engine = EngineController::new();
    engine.play_human(mv("e2e4")).unwrap();
    engine.start_search().unwrap();
    assert!(engine.is_searching());

    let outcome = engine.wait().unwrap();
    assert_eq!(outcome, SearchOutcome::Move(mv("e7e5"), MoveSource::Book));
    assert_eq!(engine.commit(outcome), Ok(Some(mv("e7e5"))));
    assert_eq!(engine.game().history_key(), "e2e4 e7e5");
}

#[test]
fn one_search_at_a_time() {
    let mut engine = EngineController::new();
    engine.start_search().unwrap();
    assert_eq!(engine.start_search(), Err(EngineError::SearchInProgress));
    assert_eq!(
        engine.play_human(mv("e2e4")),
        Err(EngineError::SearchInProgress)
    );
    engine.wait();
    assert!(engine.play_human(mv("e2e4")).is_ok());
}

#[test]
fn poll_eventually_returns_outcome() {
    let mut engine = EngineController::with_params(
        SearchParams {
            use_book: false,
            ..SearchParams::default()
        },
        Difficulty::Easy,
    );
    engine.start_search().unwrap();
    let outcome = loop {
        if let Some(outcome) = engine.poll() {
            break outcome;
        }
        std::thread::sleep(std::time::Duration::from_millis(1));
    };
    let played = engine.commit(outcome).unwrap().unwrap();
    assert_eq!(engine.game().history(), [played.history_token()]);
    assert_eq!(engine.poll(), None);
}

#[test]
fn cancel_and_new_game_reset_state() {
    let mut engine = EngineController::with_params(
        SearchParams {
            use_book: false,
            ..SearchParams::default()
        },
        Difficulty::Master,
    );
    engine.play_human(mv("d2d4")).unwrap();
    engine.start_search().unwrap();
    engine.new_game();
    assert!(!engine.is_searching());
    assert_eq!(engine.game(), &Game::new());
    assert_eq!(engine.wait(), None);
}

#[test]
fn no_search_on_finished_game() {
    let mut engine = EngineController::new();
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        engine.play_human(mv(text)).unwrap();
    }
    assert!(engine.game().is_game_over());
    assert_eq!(engine.start_search(), Err(EngineError::GameOver));
    assert_eq!(engine.commit(SearchOutcome::NoMove), Ok(None));
}

#[test]
fn rejected_human_move_reports_reason() {
    let mut engine = EngineController::new();
    let err = engine.play_human(mv("e2e5")).unwrap_err();
    assert!(matches!(err, EngineError::Move(_)));
}

#[test]
fn think_plays_for_the_side_to_move() {
    let mut engine = EngineController::new();
    engine.set_difficulty(Difficulty::Medium);
    assert_eq!(engine.difficulty().depth(), 2);
    let outcome = engine.think().unwrap();
    assert!(matches!(outcome, SearchOutcome::Move(_, MoveSource::Book)));
    assert_eq!(engine.game().history().len(), 1);
}
