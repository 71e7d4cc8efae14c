//! Example demonstrating board generation.
//!
//! Generates a board (optionally from a fixed seed), prints the seed, the
//! solution, and a validity report. With `--samples` it generates many boards
//! in parallel and reports how often the unconstrained 3x3 boxes happen to
//! come out valid.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! cargo run --example generate_board -- --seed <64-hex-chars>
//! cargo run --example generate_board -- --samples 10000
//! ```
//!
//! Backtracking traces are available through `RUST_LOG=debug`.

use std::process;

use clap::Parser;
use latinlace_generator::{BoardGenerator, BoardSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed as 64 hex characters; random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<BoardSeed>,

    /// Generate this many random boards and report box-validity statistics.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = BoardGenerator::new();

    if let Some(samples) = args.samples {
        if samples == 0 {
            eprintln!("--samples must be at least 1.");
            process::exit(1);
        }
        sample_box_validity(&generator, samples);
        return;
    }

    let result = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    let board = match result {
        Ok(board) => board,
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", board.seed);
    println!();
    println!("Solution:");
    println!("  {}", board.solution);
    println!();
    println!("Validity:");
    println!("  rows:    {}", board.solution.rows_are_valid());
    println!("  columns: {}", board.solution.columns_are_valid());
    println!("  boxes:   {}", board.solution.boxes_are_valid());
}

fn sample_box_validity(generator: &BoardGenerator, samples: usize) {
    let (completed, boxes_valid) = (0..samples)
        .into_par_iter()
        .map(|_| match generator.generate() {
            Ok(board) => (1usize, usize::from(board.solution.boxes_are_valid())),
            Err(_) => (0, 0),
        })
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

    println!("Samples: {samples}");
    println!("Completed: {completed}");
    #[expect(clippy::cast_precision_loss)]
    let rate = boxes_valid as f64 / completed.max(1) as f64;
    println!("Boxes valid: {boxes_valid} ({rate:.4})");
}
