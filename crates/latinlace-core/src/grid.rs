//! The 81-cell digit grid and its validity checker.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use derive_more::{Display as DisplayDerive, Error};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// A 9x9 grid of optional digits.
///
/// Holds either a complete generated solution or a partially known board.
/// Cells are addressed by [`Position`]; the textual form is 81 characters in
/// row-major order with `.` for empty cells.
///
/// # Examples
///
/// ```
/// use latinlace_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// assert_eq!(grid[Position::new(0, 0)], None);
///
/// grid.set(Position::new(0, 0), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert!(grid.to_string().starts_with('5'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the digit at `pos`.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if no row contains a duplicate digit.
    ///
    /// Empty cells are skipped; only assigned digits can conflict.
    #[must_use]
    pub fn rows_are_valid(&self) -> bool {
        (0..9).all(|y| self.house_is_valid((0..9).map(|x| Position::new(x, y))))
    }

    /// Returns `true` if no column contains a duplicate digit.
    #[must_use]
    pub fn columns_are_valid(&self) -> bool {
        (0..9).all(|x| self.house_is_valid((0..9).map(|y| Position::new(x, y))))
    }

    /// Returns `true` if no 3x3 box contains a duplicate digit.
    #[must_use]
    pub fn boxes_are_valid(&self) -> bool {
        (0..9).all(|b| self.house_is_valid((0..9).map(|i| Position::from_box(b, i))))
    }

    /// Checks row, column and box uniqueness of all assigned digits.
    ///
    /// This is advisory: the generator only propagates row and column
    /// exclusions, so a freshly generated solution can legitimately fail the
    /// box part of this check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rows_are_valid() && self.columns_are_valid() && self.boxes_are_valid()
    }

    fn house_is_valid(&self, positions: impl Iterator<Item = Position>) -> bool {
        let mut seen = DigitSet::new();
        for pos in positions {
            if let Some(digit) = self.get(pos)
                && !seen.insert(digit)
            {
                return false;
            }
        }
        true
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// Error parsing a [`DigitGrid`] from its 81-character textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
pub enum ParseGridError {
    /// The input did not contain exactly 81 characters.
    #[display("expected 81 cells, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// A character was neither a digit 1-9 nor `.`.
    #[display("invalid cell character: {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseGridError::InvalidLength(len));
        }
        let mut grid = Self::new();
        for (pos, c) in Position::ALL.iter().zip(s.chars()) {
            let digit = match c {
                '.' => None,
                _ => match c.to_digit(10).filter(|d| (1..=9).contains(d)) {
                    Some(d) => u8::try_from(d).ok().map(Digit::from_value),
                    None => return Err(ParseGridError::InvalidCharacter(c)),
                },
            };
            grid.set(*pos, digit);
        }
        Ok(grid)
    }
}
