//! Randomized board generation for latinlace.
//!
//! [`BoardGenerator`] fills a 9x9 grid with digits 1-9 using randomized
//! depth-first assignment with backtracking, so that every row and every
//! column contains each digit exactly once. Candidate propagation covers rows
//! and columns only; 3x3 box uniqueness is *not* enforced (checked but not
//! guaranteed), so the result is a Latin square rather than a guaranteed
//! sudoku.
//!
//! Generation is reproducible: a [`BoardSeed`] fully determines the output.
//!
//! # Examples
//!
//! ```
//! use latinlace_generator::{BoardGenerator, BoardSeed};
//!
//! let generator = BoardGenerator::new();
//! let board = generator
//!     .generate_with_seed(BoardSeed::from_u64(42))
//!     .expect("search space is not exhausted");
//!
//! assert!(board.solution.is_complete());
//! assert!(board.solution.rows_are_valid());
//! assert!(board.solution.columns_are_valid());
//! ```

pub mod generator;
pub mod seed;

pub use self::{
    generator::{BoardGenerator, GeneratedBoard, GenerationExhausted},
    seed::{BoardSeed, ParseSeedError},
};
