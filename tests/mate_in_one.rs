use serde::Deserialize;

use chessgame::{Color, Game, GameStatus, Search, SearchParams};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    name: String,
    fen: String,
    solution: String,
}

fn problems() -> Vec<Problem> {
    let data = include_str!("data/mate_in_one.json");
    let set: ProblemSet = serde_json::from_str(data).expect("invalid mate_in_one.json");
    set.problems
}

fn mated(game: &Game, loser: Color) -> bool {
    game.status()
        == GameStatus::Checkmate {
            winner: loser.opponent(),
        }
}

#[test]
fn solutions_deliver_mate() {
    for problem in problems() {
        let mut game = Game::try_from_fen(&problem.fen).expect("invalid fen");
        let mover = game.side_to_move();
        let mv = game.parse_move(&problem.solution).unwrap_or_else(|e| {
            panic!("{}: solution {} rejected: {e}", problem.name, problem.solution)
        });
        game.play(mv).unwrap();
        assert!(
            mated(&game, mover.opponent()),
            "{}: {} is not mate",
            problem.name,
            problem.solution
        );
    }
}

#[test]
fn engine_finds_mate_in_one() {
    let params = SearchParams {
        use_book: false,
        ..SearchParams::default()
    };
    for depth in [1, 2, 3] {
        for problem in problems() {
            let mut game = Game::try_from_fen(&problem.fen).unwrap();
            let mover = game.side_to_move();
            let mv = Search::new(params.clone())
                .best_move(&game, depth)
                .expect("should find a move");
            game.play(mv).unwrap();
            assert!(
                mated(&game, mover.opponent()),
                "{} at depth {depth}: engine played {mv}, not mate",
                problem.name
            );
        }
    }
}
