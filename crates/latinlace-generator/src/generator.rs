//! The randomized backtracking search.

use derive_more::{Display, Error};
use latinlace_core::{Digit, DigitGrid, DigitSet, Position};
use log::debug;
use rand::{Rng, RngExt as _};
use tinyvec::ArrayVec;

use crate::seed::BoardSeed;

/// The backtracking search unwound to an empty assignment stack before
/// filling all 81 cells.
///
/// This is fatal for the current attempt. It should not occur with a
/// structurally sound propagation rule; callers may retry with a fresh seed
/// (the same seed reproduces the same failure) or treat repeated failures as
/// a defect. The generator itself never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("generation backtracked to an empty stack before completing the board")]
pub struct GenerationExhausted;

/// A fully assigned board together with the seed that produced it.
///
/// Every row and every column of `solution` contains each digit 1-9 exactly
/// once. Box uniqueness is not guaranteed; see [`BoardGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The complete solution grid.
    pub solution: DigitGrid,
    /// The seed that reproduces this board.
    pub seed: BoardSeed,
}

/// Generates complete boards via randomized depth-first search.
///
/// The search assigns one cell at a time: a random start cell, then a cell
/// sharing a row or column with the most recent assignment, preferring the
/// cell with the fewest remaining candidates (ties broken at random). Each
/// assignment removes its digit from the candidate sets of its row and
/// column peers and records which cells actually changed, so popping an
/// assignment restores them exactly. Digits already tried for a cell are
/// tracked per stack level and forgotten when the search abandons that
/// level; when a cell runs out of candidates entirely, the stack unwinds
/// straight to the most recent assignment that pruned it.
///
/// Box exclusions are deliberately not propagated, so generated boards are
/// Latin squares that may violate 3x3 box uniqueness. The finished board is
/// still run through the full validity check for diagnostics.
///
/// # Examples
///
/// ```
/// use latinlace_generator::{BoardGenerator, BoardSeed};
///
/// let generator = BoardGenerator::new();
/// let board = generator
///     .generate_with_seed(BoardSeed::from_u64(1))
///     .expect("search space is not exhausted");
/// let again = generator
///     .generate_with_seed(board.seed)
///     .expect("same seed, same outcome");
/// assert_eq!(board, again);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardGenerator {
    _private: (),
}

impl BoardGenerator {
    /// Creates a generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a board from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationExhausted`] if the search space was exhausted;
    /// retry policy is the caller's.
    pub fn generate(&self) -> Result<GeneratedBoard, GenerationExhausted> {
        self.generate_with_seed(BoardSeed::random())
    }

    /// Generates the board determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationExhausted`] if the search space was exhausted.
    pub fn generate_with_seed(&self, seed: BoardSeed) -> Result<GeneratedBoard, GenerationExhausted> {
        let mut rng = seed.rng();
        let solution = self.generate_with_rng(&mut rng)?;
        Ok(GeneratedBoard { solution, seed })
    }

    /// Generates a board by drawing from the provided RNG.
    ///
    /// This is the injectable entry point: the game crate threads one RNG
    /// stream through generation and the reveal policy so a seed determines
    /// the whole puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationExhausted`] if the search space was exhausted.
    pub fn generate_with_rng(
        &self,
        rng: &mut impl Rng,
    ) -> Result<DigitGrid, GenerationExhausted> {
        let mut search = Search::new();

        while search.assigned() < 81 {
            let target = if search.assigned() == 0 {
                Target::fresh(Position::ALL[rng.random_range(0..Position::ALL.len())])
            } else {
                search.select_cell(rng)?
            };
            search.assign(target, rng)?;
        }

        let solution = search.into_solution();
        if !solution.boxes_are_valid() {
            // Expected for most boards; propagation covers rows and columns only.
            debug!("generated board violates 3x3 box uniqueness");
        }
        Ok(solution)
    }
}

/// The next cell to fill, together with the digits already tried there at
/// the current stack level.
#[derive(Debug, Clone, Copy)]
struct Target {
    pos: Position,
    tried: DigitSet,
}

impl Target {
    fn fresh(pos: Position) -> Self {
        Self {
            pos,
            tried: DigitSet::EMPTY,
        }
    }
}

/// One committed assignment, with enough bookkeeping to undo it.
#[derive(Debug, Clone)]
struct Assignment {
    pos: Position,
    digit: Digit,
    /// Digits attempted at this stack level so far, `digit` included. The
    /// set dies with the level, so abandoned branches lose nothing.
    tried: DigitSet,
    /// Cells whose candidate sets actually lost `digit` during propagation.
    /// No-op removals are not recorded, which keeps LIFO restoration sound.
    removed: ArrayVec<[Position; 16]>,
}

/// Mutable search state: the partial solution, per-cell candidate sets, and
/// the assignment stack.
#[derive(Debug, Clone)]
struct Search {
    values: DigitGrid,
    candidates: [DigitSet; 81],
    stack: Vec<Assignment>,
}

impl Search {
    fn new() -> Self {
        Self {
            values: DigitGrid::new(),
            candidates: [DigitSet::FULL; 81],
            stack: Vec::with_capacity(81),
        }
    }

    fn assigned(&self) -> usize {
        self.stack.len()
    }

    fn is_assigned(&self, pos: Position) -> bool {
        self.values.get(pos).is_some()
    }

    fn into_solution(self) -> DigitGrid {
        self.values
    }

    /// The 16 cells sharing a row or column with `pos`.
    fn line_peers(pos: Position) -> impl Iterator<Item = Position> {
        let row = (0..9)
            .filter(move |&x| x != pos.x())
            .map(move |x| Position::new(x, pos.y()));
        let column = (0..9)
            .filter(move |&y| y != pos.y())
            .map(move |y| Position::new(pos.x(), y));
        row.chain(column)
    }

    /// Picks the next cell to assign: an unassigned cell on the lines
    /// through the stack top with the fewest remaining candidates, ties
    /// broken at random.
    ///
    /// If both lines are fully assigned the top is a dead end; it is popped
    /// and its own value gets re-decided. An empty stack during this unwind
    /// means the whole search is exhausted.
    fn select_cell(&mut self, rng: &mut impl Rng) -> Result<Target, GenerationExhausted> {
        loop {
            let Some(top) = self.stack.last().map(|assignment| assignment.pos) else {
                return Err(GenerationExhausted);
            };
            let mut pool: ArrayVec<[Position; 16]> = ArrayVec::new();
            let mut fewest = usize::MAX;
            for peer in Self::line_peers(top) {
                if self.is_assigned(peer) {
                    continue;
                }
                let len = self.candidates[peer.index()].len();
                if len < fewest {
                    fewest = len;
                    pool.clear();
                }
                if len == fewest {
                    pool.push(peer);
                }
            }
            if !pool.is_empty() {
                return Ok(Target::fresh(pool[rng.random_range(0..pool.len())]));
            }
            debug!(
                "{}: no unassigned cell on the lines through {top}; backtracking",
                self.stack.len()
            );
            if let Some(target) = self.pop() {
                return Ok(target);
            }
        }
    }

    /// Assigns a digit to the target cell, drawn uniformly from its untried
    /// candidates.
    ///
    /// A cell with no untried candidates is a dead end. A freshly selected
    /// cell can only have been emptied by assignments that pruned it, so the
    /// stack unwinds straight to the deepest such assignment; a cell already
    /// being retried pops a single level. Either way the popped cell becomes
    /// the new target, carrying the digits it has already tried.
    fn assign(
        &mut self,
        mut target: Target,
        rng: &mut impl Rng,
    ) -> Result<(), GenerationExhausted> {
        loop {
            let open = self.candidates[target.pos.index()] - target.tried;
            if !open.is_empty() {
                let chosen = rng.random_range(0..open.len());
                if let Some(digit) = open.iter().nth(chosen) {
                    self.commit(target, digit);
                    return Ok(());
                }
            }
            debug!(
                "{}: no untried candidate at {}; backtracking",
                self.stack.len(),
                target.pos
            );
            if target.tried.is_empty() {
                self.unwind_to_pruner(target.pos);
            }
            match self.pop() {
                Some(popped) => target = popped,
                None => return Err(GenerationExhausted),
            }
        }
    }

    /// Commits an assignment: records the value, propagates exclusions, and
    /// pushes the undo record.
    fn commit(&mut self, target: Target, digit: Digit) {
        self.values.set(target.pos, Some(digit));
        let removed = self.propagate(target.pos, digit);
        let mut tried = target.tried;
        tried.insert(digit);
        self.stack.push(Assignment {
            pos: target.pos,
            digit,
            tried,
            removed,
        });
    }

    /// Removes `digit` from the candidate sets of every other cell in the
    /// same row and the same column, recording the cells that actually
    /// changed. Box peers are deliberately left untouched.
    fn propagate(&mut self, pos: Position, digit: Digit) -> ArrayVec<[Position; 16]> {
        let mut removed = ArrayVec::new();
        for peer in Self::line_peers(pos) {
            if self.candidates[peer.index()].remove(digit) {
                removed.push(peer);
            }
        }
        removed
    }

    /// Pops stack levels until the top is the most recent assignment that
    /// removed a candidate from `pos`. The levels in between did not
    /// contribute to the wipeout, so discarding them loses no solutions.
    fn unwind_to_pruner(&mut self, pos: Position) {
        while let Some(top) = self.stack.last() {
            if top.removed.contains(&pos) {
                return;
            }
            let _ = self.pop();
        }
    }

    /// Undoes the most recent assignment: re-inserts the candidates its
    /// propagation removed and clears the cell's value. Returns the cell as
    /// the next target, still carrying its tried digits so the next draw
    /// skips them.
    fn pop(&mut self) -> Option<Target> {
        let assignment = self.stack.pop()?;
        for peer in assignment.removed {
            self.candidates[peer.index()].insert(assignment.digit);
        }
        self.values.set(assignment.pos, None);
        Some(Target {
            pos: assignment.pos,
            tried: assignment.tried,
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn digits_in(positions: impl Iterator<Item = Position>, grid: &DigitGrid) -> DigitSet {
        positions.filter_map(|pos| grid.get(pos)).collect()
    }

    #[test]
    fn test_generated_board_is_complete_and_line_valid() {
        let generator = BoardGenerator::new();
        for seed in 0..20 {
            let board = generator
                .generate_with_seed(BoardSeed::from_u64(seed))
                .expect("generation succeeds");
            assert!(board.solution.is_complete());
            assert!(board.solution.rows_are_valid(), "seed {seed}: row conflict");
            assert!(
                board.solution.columns_are_valid(),
                "seed {seed}: column conflict"
            );
        }
    }

    #[test]
    fn test_generation_succeeds_for_many_seeds() {
        let generator = BoardGenerator::new();
        for seed in 0..200 {
            let result = generator.generate_with_seed(BoardSeed::from_u64(seed));
            assert!(result.is_ok(), "seed {seed} exhausted the search");
        }
    }

    #[test]
    fn test_every_line_holds_each_digit_once() {
        let board = BoardGenerator::new()
            .generate_with_seed(BoardSeed::from_u64(3))
            .expect("generation succeeds");
        for y in 0..9 {
            let row = digits_in((0..9).map(|x| Position::new(x, y)), &board.solution);
            assert_eq!(row, DigitSet::FULL, "row {y} is not a permutation");
        }
        for x in 0..9 {
            let col = digits_in((0..9).map(|y| Position::new(x, y)), &board.solution);
            assert_eq!(col, DigitSet::FULL, "column {x} is not a permutation");
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let generator = BoardGenerator::new();
        let seed = BoardSeed::from_u64(42);
        let a = generator.generate_with_seed(seed).expect("generation succeeds");
        let b = generator.generate_with_seed(seed).expect("generation succeeds");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_diverge() {
        // Not strictly guaranteed, but a collision across these seeds would
        // point at a broken seed-to-stream path.
        let generator = BoardGenerator::new();
        let a = generator
            .generate_with_seed(BoardSeed::from_u64(1))
            .expect("generation succeeds");
        let b = generator
            .generate_with_seed(BoardSeed::from_u64(2))
            .expect("generation succeeds");
        assert_ne!(a.solution, b.solution);
    }

    #[test]
    fn test_box_uniqueness_is_not_guaranteed() {
        // Row/column propagation alone almost never lands on a valid sudoku;
        // across this many seeds at least one board must break a box.
        let generator = BoardGenerator::new();
        let violated = (0..50).any(|seed| {
            let board = generator
                .generate_with_seed(BoardSeed::from_u64(seed))
                .expect("generation succeeds");
            !board.solution.boxes_are_valid()
        });
        assert!(violated, "every board satisfied box uniqueness");
    }

    #[test]
    fn test_propagation_skips_box_peers() {
        let mut search = Search::new();
        search.commit(Target::fresh(Position::new(0, 0)), Digit::D5);

        // Row and column peers lose the digit.
        assert!(!search.candidates[Position::new(8, 0).index()].contains(Digit::D5));
        assert!(!search.candidates[Position::new(0, 8).index()].contains(Digit::D5));
        // A box peer off the row and column keeps it.
        assert!(search.candidates[Position::new(1, 1).index()].contains(Digit::D5));
    }

    #[test]
    fn test_pop_restores_candidates_and_reports_tried() {
        let mut search = Search::new();
        search.commit(Target::fresh(Position::new(4, 4)), Digit::D7);
        assert!(!search.candidates[Position::new(0, 4).index()].contains(Digit::D7));

        let popped = search.pop().expect("one assignment to pop");
        assert_eq!(popped.pos, Position::new(4, 4));
        assert!(popped.tried.contains(Digit::D7));
        // Peer candidates come back.
        assert!(search.candidates[Position::new(0, 4).index()].contains(Digit::D7));
        // The spent digit stays in the candidate store; only the popped
        // target remembers it was tried.
        assert!(search.candidates[Position::new(4, 4).index()].contains(Digit::D7));
        assert!(!search.is_assigned(Position::new(4, 4)));
        assert_eq!(search.assigned(), 0);
    }

    #[test]
    fn test_unwinding_restores_every_candidate() {
        let mut search = Search::new();
        search.commit(Target::fresh(Position::new(0, 0)), Digit::D1);
        search.commit(Target::fresh(Position::new(3, 0)), Digit::D2);
        search.commit(Target::fresh(Position::new(3, 5)), Digit::D3);

        while search.pop().is_some() {}

        assert_eq!(search.assigned(), 0);
        for pos in Position::ALL {
            assert_eq!(
                search.candidates[pos.index()],
                DigitSet::FULL,
                "candidates permanently lost at {pos}"
            );
        }
    }

    #[test]
    fn test_selection_prefers_fewest_candidates() {
        let mut search = Search::new();
        search.commit(Target::fresh(Position::new(0, 0)), Digit::D5);
        search.candidates[Position::new(6, 0).index()] = DigitSet::from_iter([Digit::D9]);

        let mut rng = BoardSeed::from_u64(0).rng();
        let target = search.select_cell(&mut rng).expect("stack is not empty");
        assert_eq!(target.pos, Position::new(6, 0));
        assert!(target.tried.is_empty());
    }

    #[test]
    fn test_unwind_stops_at_pruning_assignment() {
        let mut search = Search::new();
        search.commit(Target::fresh(Position::new(0, 0)), Digit::D5);
        search.commit(Target::fresh(Position::new(1, 1)), Digit::D6);
        search.commit(Target::fresh(Position::new(2, 2)), Digit::D7);

        // (0, 5) lost a candidate only to the first assignment (same column).
        search.unwind_to_pruner(Position::new(0, 5));

        assert_eq!(search.assigned(), 1);
        assert!(search.is_assigned(Position::new(0, 0)));
        // The discarded levels were fully undone.
        assert!(!search.is_assigned(Position::new(1, 1)));
        assert!(!search.is_assigned(Position::new(2, 2)));
        assert!(search.candidates[Position::new(1, 5).index()].contains(Digit::D6));
    }

    #[test]
    fn test_pop_on_empty_stack_is_none() {
        let mut search = Search::new();
        assert!(search.pop().is_none());
    }

    #[test]
    fn test_exhausted_error_is_displayable() {
        assert_eq!(
            GenerationExhausted.to_string(),
            "generation backtracked to an empty stack before completing the board"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_any_seed_yields_line_valid_board(seed in any::<u64>()) {
            let board = BoardGenerator::new()
                .generate_with_seed(BoardSeed::from_u64(seed))
                .expect("generation succeeds");
            prop_assert!(board.solution.is_complete());
            prop_assert!(board.solution.rows_are_valid());
            prop_assert!(board.solution.columns_are_valid());
        }
    }
}
