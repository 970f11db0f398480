//! Permutation enumerator.
//!
//! Players may spend pending dice in any order and split them across
//! pieces, so every ordering of every non-empty sub-multiset is a distinct
//! candidate. Repeated faces are deduplicated: `[6, 6]` yields `[6]` and
//! `[6, 6]`, not `[6]` twice.

use rustc_hash::FxHashSet;
use smallvec::{smallvec, SmallVec};

use super::sequence::DiceSequence;

/// All distinct orderings of all non-empty subsets of `pending`.
///
/// Output is grouped by length (shortest first); within a length, sequences
/// appear in the order a left-to-right backtracking search first reaches
/// them. Pure and deterministic.
///
/// ```
/// use ludo_engine::moves::{enumerate_sequences, DiceSequence};
///
/// let seqs = enumerate_sequences(&[3, 5]);
/// assert_eq!(seqs, vec![
///     DiceSequence::from_values(&[3]),
///     DiceSequence::from_values(&[5]),
///     DiceSequence::from_values(&[3, 5]),
///     DiceSequence::from_values(&[5, 3]),
/// ]);
/// ```
#[must_use]
pub fn enumerate_sequences(pending: &[u8]) -> Vec<DiceSequence> {
    let mut out = Vec::new();
    let mut seen = FxHashSet::default();
    let mut used: SmallVec<[bool; 4]> = smallvec![false; pending.len()];
    let mut current = DiceSequence::new();

    for len in 1..=pending.len() {
        backtrack(pending, len, &mut used, &mut current, &mut seen, &mut out);
    }

    out
}

fn backtrack(
    pending: &[u8],
    len: usize,
    used: &mut [bool],
    current: &mut DiceSequence,
    seen: &mut FxHashSet<DiceSequence>,
    out: &mut Vec<DiceSequence>,
) {
    if current.len() == len {
        if seen.insert(current.clone()) {
            out.push(current.clone());
        }
        return;
    }

    for i in 0..pending.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(pending[i]);
        backtrack(pending, len, used, current, seen, out);
        current.pop();
        used[i] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seqs(values: &[&[u8]]) -> Vec<DiceSequence> {
        values.iter().map(|v| DiceSequence::from_values(v)).collect()
    }

    #[test]
    fn test_empty_pending() {
        assert!(enumerate_sequences(&[]).is_empty());
    }

    #[test]
    fn test_two_distinct_values() {
        assert_eq!(
            enumerate_sequences(&[3, 5]),
            seqs(&[&[3], &[5], &[3, 5], &[5, 3]])
        );
    }

    #[test]
    fn test_repeated_values_deduplicate() {
        assert_eq!(enumerate_sequences(&[6, 6]), seqs(&[&[6], &[6, 6]]));
    }

    #[test]
    fn test_three_values_with_repeat() {
        // Singles: 6, 4. Pairs: 66, 64, 46. Triples: 664, 646, 466.
        let result = enumerate_sequences(&[6, 6, 4]);
        assert_eq!(
            result,
            seqs(&[&[6], &[4], &[6, 6], &[6, 4], &[4, 6], &[6, 6, 4], &[6, 4, 6], &[4, 6, 6]])
        );
    }

    #[test]
    fn test_three_distinct_values_count() {
        // 3 + 6 + 6
        assert_eq!(enumerate_sequences(&[1, 2, 3]).len(), 15);
    }

    proptest! {
        #[test]
        fn prop_sequences_are_unique(pending in proptest::collection::vec(1u8..=6, 0..5)) {
            let result = enumerate_sequences(&pending);
            let unique: FxHashSet<_> = result.iter().cloned().collect();
            prop_assert_eq!(unique.len(), result.len());
        }

        #[test]
        fn prop_sequences_draw_from_pending(pending in proptest::collection::vec(1u8..=6, 0..5)) {
            for seq in enumerate_sequences(&pending) {
                prop_assert!(!seq.is_empty());
                let mut remaining: crate::moves::DiceList = pending.iter().copied().collect();
                prop_assert!(seq.remove_from(&mut remaining));
            }
        }

        #[test]
        fn prop_sorted_by_length(pending in proptest::collection::vec(1u8..=6, 0..5)) {
            let lens: Vec<_> = enumerate_sequences(&pending).iter().map(DiceSequence::len).collect();
            prop_assert!(lens.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn prop_full_length_orderings_present(pending in proptest::collection::vec(1u8..=6, 1..5)) {
            let result = enumerate_sequences(&pending);
            let mut reversed = pending.clone();
            reversed.reverse();
            prop_assert!(result.contains(&DiceSequence::from_values(&pending)));
            prop_assert!(result.contains(&DiceSequence::from_values(&reversed)));
        }
    }
}
