//! Per-cell player-visible state.

use derive_more::IsVariant;
use latinlace_core::Digit;

/// The state of one cell as the player sees it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// Revealed at puzzle creation; locked against player edits.
    Given(Digit),
    /// A player-entered digit.
    Filled(Digit),
    /// No digit yet.
    #[default]
    Empty,
}

impl CellState {
    /// Returns the digit currently in the cell, if any.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }

    /// Returns `true` if the cell rejects player edits.
    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Given(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_access() {
        assert_eq!(CellState::Given(Digit::D3).digit(), Some(Digit::D3));
        assert_eq!(CellState::Filled(Digit::D8).digit(), Some(Digit::D8));
        assert_eq!(CellState::Empty.digit(), None);
    }

    #[test]
    fn test_only_given_cells_are_locked() {
        assert!(CellState::Given(Digit::D1).is_locked());
        assert!(!CellState::Filled(Digit::D1).is_locked());
        assert!(!CellState::Empty.is_locked());
    }
}
