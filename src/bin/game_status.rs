use std::env;
use std::process::ExitCode;

use mini_chess::board::{Preset, Square};
use mini_chess::engine::{Game, GameConfig};

fn parse_move(text: &str) -> Option<(Square, Square)> {
    let (from, to) = text.split_once('-')?;
    Some((from.parse().ok()?, to.parse().ok()?))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: game_status <preset> [r,c-r,c ...]");
        return ExitCode::FAILURE;
    }

    let preset = match args[1].parse::<Preset>() {
        Ok(preset) => preset,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let mut game = Game::start(GameConfig::new(preset));

    for text in args.iter().skip(2) {
        let Some((from, to)) = parse_move(text) else {
            eprintln!("bad move: {text}");
            return ExitCode::FAILURE;
        };
        let played = game
            .select(from)
            .and_then(|_| game.select(to))
            .map(|outcome| outcome.move_was_made());
        match played {
            Ok(true) => {}
            Ok(false) => {
                eprintln!("illegal move: {text}");
                return ExitCode::FAILURE;
            }
            Err(err) => {
                eprintln!("{text}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let player = game.active_player();
    let mut legal = Vec::new();
    for (from, _) in game.board().pieces_of(player) {
        if let Ok(moves) = game.legal_moves_for(from) {
            legal.extend(moves.into_iter().map(|m| (from, m.destination)));
        }
    }

    println!("board: {}", game.board().to_notation());
    println!("side_to_move: {player}");
    println!("phase: {:?}", game.phase());
    println!("in_check: {}", game.in_check());
    println!("legal_moves: {}", legal.len());
    for (from, to) in legal {
        println!("{from}-{to}");
    }
    ExitCode::SUCCESS
}
