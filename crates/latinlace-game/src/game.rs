//! A playable puzzle session.

use latinlace_core::{Digit, DigitGrid, Position};
use latinlace_generator::{BoardGenerator, BoardSeed, GenerationExhausted};
use log::debug;
use rand::RngExt as _;

use crate::{CellState, Difficulty, GameError};

/// A puzzle session: the generated solution, the revealed cells, and the
/// player's working entries.
///
/// Created by [`Game::new`], which runs the generator and then the difficulty
/// reveal policy on a single RNG stream, so one seed determines the entire
/// puzzle. Revealed cells are locked; only hidden cells accept
/// [`submit_entry`](Game::submit_entry).
///
/// # Examples
///
/// ```
/// use latinlace_core::Position;
/// use latinlace_game::{CellState, Difficulty, Game};
/// use latinlace_generator::BoardSeed;
///
/// let mut game = Game::new(Difficulty::Medium, BoardSeed::from_u64(42))
///     .expect("generation succeeds");
///
/// let hidden = Position::ALL
///     .into_iter()
///     .find(|&pos| !game.cell(pos).is_locked())
///     .expect("a medium puzzle hides cells");
/// let digit = game.solution().get(hidden).expect("solution is complete");
/// game.submit_entry(hidden, digit).unwrap();
/// assert_eq!(game.cell(hidden), CellState::Filled(digit));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: DigitGrid,
    seed: BoardSeed,
    difficulty: Difficulty,
}

impl Game {
    /// Generates a new puzzle at the given difficulty from `seed`.
    ///
    /// Runs the board generator, then reveals cells row-major: for each cell
    /// a uniform draw in `1..=10` at most the difficulty's reveal weight
    /// marks the cell as given (shown and locked).
    ///
    /// # Errors
    ///
    /// Propagates [`GenerationExhausted`] if the backtracking search failed;
    /// the caller may retry with a different seed.
    pub fn new(difficulty: Difficulty, seed: BoardSeed) -> Result<Self, GenerationExhausted> {
        let mut rng = seed.rng();
        let solution = BoardGenerator::new().generate_with_rng(&mut rng)?;

        let mut cells = [CellState::Empty; 81];
        let weight = difficulty.reveal_weight();
        let mut shown = 0;
        for pos in Position::ALL {
            if rng.random_range(1..=10u8) <= weight
                && let Some(digit) = solution.get(pos)
            {
                cells[pos.index()] = CellState::Given(digit);
                shown += 1;
            }
        }
        debug!("revealed {shown} of 81 cells at {difficulty:?}");

        Ok(Self {
            cells,
            solution,
            seed,
            difficulty,
        })
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns the digit currently visible at `pos`, given or player-entered.
    #[must_use]
    pub fn current(&self, pos: Position) -> Option<Digit> {
        self.cell(pos).digit()
    }

    /// Returns the generated solution grid.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the seed this puzzle was generated from.
    #[must_use]
    pub fn seed(&self) -> BoardSeed {
        self.seed
    }

    /// Returns the difficulty the puzzle was created at.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the number of revealed (locked) cells.
    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_locked()).count()
    }

    /// Enters a digit at `pos`, replacing any earlier entry there.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellLocked`] if the cell is a given; the cell is
    /// left unchanged.
    pub fn submit_entry(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        if self.cell(pos).is_locked() {
            return Err(GameError::CellLocked);
        }
        self.cells[pos.index()] = CellState::Filled(digit);
        Ok(())
    }

    /// Clears the player's entry at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellLocked`] if the cell is a given.
    pub fn clear_entry(&mut self, pos: Position) -> Result<(), GameError> {
        if self.cell(pos).is_locked() {
            return Err(GameError::CellLocked);
        }
        self.cells[pos.index()] = CellState::Empty;
        Ok(())
    }

    /// Restores the board to its initial state: every hidden cell is emptied
    /// and the given cells remain locked. The solution is kept as-is.
    pub fn reset_to_initial(&mut self) {
        for cell in &mut self.cells {
            if !cell.is_locked() {
                *cell = CellState::Empty;
            }
        }
    }

    /// Returns `true` if the player has completed the puzzle.
    ///
    /// A game is won when the board matches the generated solution exactly,
    /// or when it forms some other valid completion; the latter check is not
    /// implemented and never reports a win (see
    /// [`matches_alternate_completion`](Self::matches_alternate_completion)).
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.matches_solution() || self.matches_alternate_completion()
    }

    /// Returns `true` if every cell holds exactly the generated solution's
    /// digit.
    #[must_use]
    pub fn matches_solution(&self) -> bool {
        Position::ALL
            .into_iter()
            .all(|pos| self.current(pos).is_some() && self.current(pos) == self.solution.get(pos))
    }

    /// Returns `true` if the board is a valid completion that differs from
    /// the generated solution.
    ///
    /// Not implemented: recognizing alternative completions would need a
    /// constraint solver of its own, so this path always reports `false`.
    #[must_use]
    pub fn matches_alternate_completion(&self) -> bool {
        false
    }
}
