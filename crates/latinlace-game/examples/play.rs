//! Example demonstrating a full game session.
//!
//! Creates a puzzle at the chosen difficulty, prints the starting board, then
//! fills every hidden cell from the solution and reports the win check.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play
//! ```
//!
//! Pick a difficulty and reproduce a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --example play -- --difficulty hard --seed <64-hex-chars>
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use latinlace_core::Position;
use latinlace_game::{CellState, Difficulty, Game};
use latinlace_generator::BoardSeed;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    ChildsPlay,
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::ChildsPlay => Self::ChildsPlay,
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
            DifficultyArg::Extreme => Self::Extreme,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level for the new game.
    #[arg(long, value_name = "LEVEL", default_value = "easy")]
    difficulty: DifficultyArg,

    /// Seed as 64 hex characters. Random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<BoardSeed>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(BoardSeed::random);
    let mut game = match Game::new(args.difficulty.into(), seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", game.seed());
    println!();
    println!(
        "Board ({:?}, {} of 81 revealed):",
        game.difficulty(),
        game.shown_count()
    );
    print_board(&game);
    println!();

    for pos in Position::ALL {
        if !game.cell(pos).is_locked() {
            let digit = game
                .solution()
                .get(pos)
                .expect("generated solutions are complete");
            game.submit_entry(pos, digit)
                .expect("hidden cells accept entries");
        }
    }

    println!("After filling from the solution:");
    print_board(&game);
    println!();
    println!("Won: {}", game.has_won());
}

fn print_board(game: &Game) {
    for y in 0..9 {
        print!(" ");
        for x in 0..9 {
            match game.cell(Position::new(x, y)) {
                CellState::Given(digit) => print!(" [{digit}]"),
                CellState::Filled(digit) => print!("  {digit} "),
                CellState::Empty => print!("  . "),
            }
        }
        println!();
    }
}
