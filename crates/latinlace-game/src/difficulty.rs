//! Difficulty levels and their reveal weights.

/// Puzzle difficulty, controlling how much of the solution is revealed.
///
/// Each level maps to a reveal weight: for every cell a uniform integer in
/// `1..=10` is drawn and the cell is revealed when the draw is at most the
/// weight, so the weight is the expected number of revealed cells per ten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// Almost everything revealed (weight 9).
    ChildsPlay,
    /// The default level (weight 6).
    #[default]
    Easy,
    /// Weight 4.
    Medium,
    /// Weight 2.
    Hard,
    /// Barely anything revealed (weight 1).
    Extreme,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Self; 5] = [
        Self::ChildsPlay,
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Extreme,
    ];

    /// Returns the reveal weight for this level (out of 10).
    #[must_use]
    pub const fn reveal_weight(self) -> u8 {
        match self {
            Self::ChildsPlay => 9,
            Self::Easy => 6,
            Self::Medium => 4,
            Self::Hard => 2,
            Self::Extreme => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_table() {
        assert_eq!(Difficulty::ChildsPlay.reveal_weight(), 9);
        assert_eq!(Difficulty::Easy.reveal_weight(), 6);
        assert_eq!(Difficulty::Medium.reveal_weight(), 4);
        assert_eq!(Difficulty::Hard.reveal_weight(), 2);
        assert_eq!(Difficulty::Extreme.reveal_weight(), 1);
    }

    #[test]
    fn test_default_is_easy() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn test_weights_decrease_with_difficulty() {
        for pair in Difficulty::ALL.windows(2) {
            assert!(pair[0].reveal_weight() > pair[1].reveal_weight());
        }
    }
}
