//! Move projector.
//!
//! Folds an ordered dice sequence over a piece's path index, one die at a
//! time. A die that cannot be applied poisons the rest of that sequence;
//! a different ordering of the same dice may still succeed.

use crate::core::PathIndex;

/// Result of projecting a sequence: the final index, or `None` if the
/// sequence cannot be played with this piece.
pub type Projection = Option<PathIndex>;

/// Per-die step rules.
#[derive(Clone, Copy, Debug)]
pub struct Projector<'a> {
    opening_values: &'a [u8],
    home: PathIndex,
}

impl<'a> Projector<'a> {
    #[must_use]
    pub fn new(opening_values: &'a [u8], home: PathIndex) -> Self {
        Self {
            opening_values,
            home,
        }
    }

    /// Apply one die to a piece at `from`.
    ///
    /// - In base: an opening value unlocks the piece onto the start square
    ///   (the whole die is spent); anything else leaves it stuck.
    /// - On the path: advance by the die, unless that overshoots home.
    #[must_use]
    pub fn step(&self, from: PathIndex, die: u8) -> Projection {
        if from.is_base() {
            return self.opening_values.contains(&die).then_some(PathIndex::START);
        }

        let next = u16::from(from.raw()) + u16::from(die);
        if next > u16::from(self.home.raw()) {
            return None;
        }
        Some(PathIndex::new(next as u8))
    }

    /// Apply every die of `sequence` in order, starting from `from`.
    ///
    /// ```
    /// use ludo_engine::core::PathIndex;
    /// use ludo_engine::moves::Projector;
    ///
    /// let projector = Projector::new(&[1, 6], PathIndex::new(57));
    /// assert_eq!(projector.project(&[6, 2], PathIndex::BASE), Some(PathIndex::new(3)));
    /// assert_eq!(projector.project(&[2, 6], PathIndex::BASE), None);
    /// ```
    #[must_use]
    pub fn project(&self, sequence: &[u8], from: PathIndex) -> Projection {
        sequence
            .iter()
            .try_fold(from, |position, &die| self.step(position, die))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HOME: PathIndex = PathIndex::new(57);

    fn projector() -> Projector<'static> {
        Projector::new(&[1, 6], HOME)
    }

    #[test]
    fn test_simple_advance() {
        assert_eq!(projector().project(&[4], PathIndex::new(10)), Some(PathIndex::new(14)));
    }

    #[test]
    fn test_overshoot_poisons_sequence() {
        // 50 + 3 = 53 is fine alone, but 53 + 5 = 58 overshoots home
        assert_eq!(projector().project(&[3], PathIndex::new(50)), Some(PathIndex::new(53)));
        assert_eq!(projector().project(&[3, 5], PathIndex::new(50)), None);
    }

    #[test]
    fn test_exact_home() {
        assert_eq!(projector().project(&[2, 5], PathIndex::new(50)), Some(HOME));
    }

    #[test]
    fn test_home_piece_cannot_move() {
        assert_eq!(projector().project(&[1], HOME), None);
    }

    #[test]
    fn test_unlock_then_advance() {
        assert_eq!(projector().project(&[6, 2], PathIndex::BASE), Some(PathIndex::new(3)));
        assert_eq!(projector().project(&[1], PathIndex::BASE), Some(PathIndex::START));
    }

    #[test]
    fn test_stuck_in_base_is_not_revived() {
        assert_eq!(projector().project(&[2, 6], PathIndex::BASE), None);
        assert_eq!(projector().project(&[2], PathIndex::BASE), None);
    }

    #[test]
    fn test_custom_opening_values() {
        let only_six = Projector::new(&[6], HOME);
        assert_eq!(only_six.project(&[1], PathIndex::BASE), None);
        assert_eq!(only_six.project(&[6], PathIndex::BASE), Some(PathIndex::START));
    }

    proptest! {
        #[test]
        fn prop_projection_within_bounds(
            from in 0u8..=57,
            dice in proptest::collection::vec(1u8..=6, 1..4),
        ) {
            if let Some(to) = projector().project(&dice, PathIndex::new(from)) {
                prop_assert!(to >= PathIndex::START);
                prop_assert!(to <= HOME);
            }
        }

        #[test]
        fn prop_on_path_moves_by_sum(
            from in 1u8..=57,
            dice in proptest::collection::vec(1u8..=6, 1..4),
        ) {
            let sum: u16 = dice.iter().map(|&d| u16::from(d)).sum();
            let expected = (u16::from(from) + sum <= 57).then(|| PathIndex::new(from + sum as u8));
            prop_assert_eq!(projector().project(&dice, PathIndex::new(from)), expected);
        }
    }
}
