//! Game session management for latinlace puzzles.
//!
//! This crate turns a generated solution into a playable puzzle:
//!
//! - [`Difficulty`] maps a level to a per-cell reveal probability
//! - [`Game`] tracks revealed (locked) cells and player entries
//! - [`Game::submit_entry`] rejects writes to locked cells with
//!   [`GameError::CellLocked`]
//! - [`Game::has_won`] compares the player's entries against the solution
//!
//! # Examples
//!
//! ```
//! use latinlace_game::{Difficulty, Game};
//! use latinlace_generator::BoardSeed;
//!
//! let game = Game::new(Difficulty::Medium, BoardSeed::from_u64(42))
//!     .expect("generation succeeds");
//! assert!(!game.has_won());
//! assert!(game.shown_count() > 0);
//! ```

pub mod cell_state;
pub mod difficulty;
pub mod error;
pub mod game;

pub use self::{cell_state::CellState, difficulty::Difficulty, error::GameError, game::Game};
