//! Game-level errors.

use derive_more::{Display, Error};

/// Errors raised by player operations on a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The target cell was revealed at puzzle creation and is locked.
    ///
    /// Recoverable: the operation is rejected and no state changes.
    #[display("cell is revealed and locked against player edits")]
    CellLocked,
}
