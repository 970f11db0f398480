//! Ordered dice sequences.
//!
//! A `DiceSequence` is both a candidate play ("apply 3, then 5") and the
//! key the legal-move table is indexed by. Equality is structural, so
//! `[3, 5]` and `[5, 3]` are distinct keys.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Inline capacity for dice lists. A turn rarely holds more than three.
pub type DiceList = SmallVec<[u8; 4]>;

/// An ordered selection of pending die values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiceSequence(pub DiceList);

impl DiceSequence {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequence from die values in application order.
    #[must_use]
    pub fn from_values(values: &[u8]) -> Self {
        Self(SmallVec::from_slice(values))
    }

    /// Die values in application order.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.0
    }

    /// Number of dice consumed by this sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence uses no dice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, value: u8) {
        self.0.push(value);
    }

    pub(crate) fn pop(&mut self) -> Option<u8> {
        self.0.pop()
    }

    /// Remove one occurrence of each of this sequence's values from `pending`.
    ///
    /// All-or-nothing: if any value is missing, `pending` is left untouched
    /// and false is returned.
    pub fn remove_from(&self, pending: &mut DiceList) -> bool {
        let mut remaining = pending.clone();
        for value in &self.0 {
            match remaining.iter().position(|v| v == value) {
                Some(pos) => {
                    remaining.remove(pos);
                }
                None => return false,
            }
        }
        *pending = remaining;
        true
    }
}

impl std::fmt::Display for DiceSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0.as_slice())
    }
}
