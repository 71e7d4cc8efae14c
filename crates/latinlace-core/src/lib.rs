//! Core data structures for the latinlace puzzle engine.
//!
//! This crate holds the passive data model shared by the generator and the
//! game session crates:
//!
//! - [`Digit`]: type-safe digits 1-9
//! - [`Position`]: a board coordinate (x, y)
//! - [`DigitSet`]: a candidate set of digits for a single cell
//! - [`DigitGrid`]: 81 optional digits, plus the validity checker
//!
//! Nothing here is random or fallible beyond parsing; the search and the
//! player-facing state live in `latinlace-generator` and `latinlace-game`.
//!
//! # Examples
//!
//! ```
//! use latinlace_core::{Digit, DigitSet, Position};
//!
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(Digit::D5);
//! assert_eq!(candidates.len(), 8);
//!
//! let pos = Position::new(4, 7);
//! assert_eq!(pos.box_index(), 7);
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    position::Position,
};
