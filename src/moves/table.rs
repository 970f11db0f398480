//! Legal-move table.
//!
//! Maps every candidate dice sequence to where it would take each of the
//! current player's pieces. Rebuilt wholesale whenever the pending dice or
//! the pieces change; never patched in place.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::permutations::enumerate_sequences;
use super::projector::{Projection, Projector};
use super::sequence::DiceSequence;
use crate::core::{PathIndex, PIECES_PER_PLAYER};

/// One row of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalMoveEntry {
    pub sequence: DiceSequence,
    /// Projected index per piece, `None` where the sequence is unplayable.
    pub projections: [Projection; PIECES_PER_PLAYER],
}

/// Candidate sequences in enumeration order, with a hash index by sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LegalMoveEntry>", into = "Vec<LegalMoveEntry>")]
pub struct LegalMoveTable {
    entries: Vec<LegalMoveEntry>,
    index: FxHashMap<DiceSequence, usize>,
}

impl LegalMoveTable {
    /// Create an empty table (no pending dice).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Project every ordering of `pending` against `pieces`.
    #[must_use]
    pub fn build(
        pending: &[u8],
        pieces: &[PathIndex; PIECES_PER_PLAYER],
        projector: &Projector<'_>,
    ) -> Self {
        enumerate_sequences(pending)
            .into_iter()
            .map(|sequence| {
                let projections = pieces.map(|from| projector.project(sequence.values(), from));
                LegalMoveEntry {
                    sequence,
                    projections,
                }
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// Number of candidate sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no candidate sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows in enumeration order.
    #[must_use]
    pub fn entries(&self) -> &[LegalMoveEntry] {
        &self.entries
    }

    /// Projections for a specific sequence.
    #[must_use]
    pub fn get(&self, sequence: &DiceSequence) -> Option<&[Projection; PIECES_PER_PLAYER]> {
        self.index.get(sequence).map(|&i| &self.entries[i].projections)
    }

    /// Whether any sequence moves any piece.
    #[must_use]
    pub fn has_any_move(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.projections.iter().any(Option::is_some))
    }

    /// Whether some sequence takes `piece` exactly to `target`.
    #[must_use]
    pub fn is_legal(&self, piece: usize, target: PathIndex) -> bool {
        self.sequence_for(piece, target).is_some()
    }

    /// The sequence a move of `piece` to `target` would consume.
    ///
    /// When several sequences reach the same index, the one spending the
    /// fewest dice wins; ties go to enumeration order.
    #[must_use]
    pub fn sequence_for(&self, piece: usize, target: PathIndex) -> Option<&DiceSequence> {
        if piece >= PIECES_PER_PLAYER {
            return None;
        }
        self.entries
            .iter()
            .filter(|e| e.projections[piece] == Some(target))
            .min_by_key(|e| e.sequence.len())
            .map(|e| &e.sequence)
    }

    /// Drop every row.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

impl From<Vec<LegalMoveEntry>> for LegalMoveTable {
    fn from(entries: Vec<LegalMoveEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.sequence.clone(), i))
            .collect();
        Self { entries, index }
    }
}

impl From<LegalMoveTable> for Vec<LegalMoveEntry> {
    fn from(table: LegalMoveTable) -> Self {
        table.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: PathIndex = PathIndex::new(57);

    fn build(pending: &[u8], pieces: [u8; 4]) -> LegalMoveTable {
        let projector = Projector::new(&[1, 6], HOME);
        LegalMoveTable::build(pending, &pieces.map(PathIndex::new), &projector)
    }

    fn seq(values: &[u8]) -> DiceSequence {
        DiceSequence::from_values(values)
    }

    #[test]
    fn test_empty_pending_has_no_moves() {
        let table = build(&[], [0, 0, 0, 0]);
        assert!(table.is_empty());
        assert!(!table.has_any_move());
    }

    #[test]
    fn test_rows_per_sequence() {
        let table = build(&[6, 4], [0, 10, 0, 57]);
        assert_eq!(table.len(), 4);

        assert_eq!(
            table.get(&seq(&[6])),
            Some(&[Some(PathIndex::START), Some(PathIndex::new(16)), Some(PathIndex::START), None])
        );
        assert_eq!(
            table.get(&seq(&[4, 6])),
            Some(&[None, Some(PathIndex::new(20)), None, None])
        );
        assert_eq!(table.get(&seq(&[6, 4])).unwrap()[0], Some(PathIndex::new(5)));
        assert!(table.get(&seq(&[5])).is_none());
    }

    #[test]
    fn test_all_base_without_opening_value() {
        let table = build(&[3, 5], [0, 0, 0, 0]);
        assert_eq!(table.len(), 4);
        assert!(!table.has_any_move());
    }

    #[test]
    fn test_is_legal() {
        let table = build(&[3, 5], [50, 0, 0, 0]);
        assert!(table.is_legal(0, PathIndex::new(53)));
        assert!(table.is_legal(0, PathIndex::new(55)));
        assert!(!table.is_legal(0, PathIndex::new(58)));
        assert!(!table.is_legal(1, PathIndex::new(53)));
        assert!(!table.is_legal(7, PathIndex::new(53)));
    }

    #[test]
    fn test_sequence_for_prefers_fewest_dice() {
        // 10 + 6 = 16 and 10 + 2 + 4 = 16
        let table = build(&[2, 4, 6], [10, 0, 0, 0]);
        assert_eq!(table.sequence_for(0, PathIndex::new(16)), Some(&seq(&[6])));
        assert_eq!(table.sequence_for(0, PathIndex::new(12)), Some(&seq(&[2])));
        assert_eq!(table.sequence_for(0, PathIndex::new(18)), Some(&seq(&[2, 6])));
    }

    #[test]
    fn test_serde_rebuilds_index() {
        let table = build(&[6, 1], [0, 5, 0, 0]);
        let json = serde_json::to_string(&table).unwrap();
        let restored: LegalMoveTable = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, table);
        assert_eq!(restored.get(&seq(&[1, 6])), table.get(&seq(&[1, 6])));
    }
}
