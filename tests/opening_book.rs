//! Opening book tests against real games.

use std::sync::atomic::AtomicBool;

use chessgame::book::STANDARD_LINES;
use chessgame::search::MoveSource;
use chessgame::{Game, OpeningBook, Search, SearchParams};

#[test]
fn every_book_line_is_playable() {
    for line in STANDARD_LINES {
        let mut game = Game::new();
        for token in line.split_whitespace() {
            let mv = game
                .parse_move(token)
                .unwrap_or_else(|e| panic!("'{line}': {token} rejected: {e}"));
            game.play(mv).unwrap();
        }
        assert_eq!(game.history_key(), *line);
    }
}

#[test]
fn book_follows_first_line_from_the_start() {
    let book = OpeningBook::standard();
    let mut game = Game::new();
    let first = STANDARD_LINES[0];
    for expected in first.split_whitespace() {
        let mv = book.lookup_game(&game).expect("book should know this position");
        assert_eq!(mv.history_token(), expected);
        game.play(mv).unwrap();
    }
    assert_eq!(book.lookup_game(&game), None);
}

#[test]
fn search_leaves_book_after_unknown_move() {
    let mut game = Game::new();
    let mv = game.parse_move("h2h4").unwrap();
    game.play(mv).unwrap();

    let stop = AtomicBool::new(false);
    let mut search = Search::new(SearchParams::default());
    let result = search.run(&game, 1, &stop).unwrap();
    assert_eq!(result.source, MoveSource::Search);
    assert_eq!(search.stats().book_hits, 0);
}

#[test]
fn disabled_book_is_never_consulted() {
    let params = SearchParams {
        use_book: false,
        ..SearchParams::default()
    };
    let stop = AtomicBool::new(false);
    let result = Search::new(params).run(&Game::new(), 1, &stop).unwrap();
    assert_eq!(result.source, MoveSource::Search);
}
