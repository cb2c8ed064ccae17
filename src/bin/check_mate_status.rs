use std::env;
use std::process::ExitCode;

use chessgame::Game;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Game::new();
    for text in args.iter().skip(1) {
        let played = game
            .parse_move(text)
            .map_err(|e| e.to_string())
            .and_then(|mv| game.play(mv).map_err(|e| e.to_string()));
        if let Err(err) = played {
            eprintln!("{text}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let status = game.status();
    println!("side_to_move: {}", game.side_to_move());
    println!("legal_moves: {}", game.legal_moves().len());
    println!("in_check: {}", game.in_check(game.side_to_move()));
    println!("status: {status}");
    println!("{}", game.board());
    for mv in game.legal_moves() {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
