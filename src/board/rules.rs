//! Board rules table and lookups.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, PathIndex};
use crate::error::RulesError;

/// Board cell identifier. The presentation layer owns the meaning;
/// the core only compares them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(pub u16);

impl CellId {
    /// Create a new cell ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// Static rule data the engine consumes at initialization.
///
/// ## Paths
///
/// `paths[color]` has `home_index + 1` cells: index 0 is the color's base
/// cell, `home_index` is its home cell. A cell that appears on more than
/// one color's path is *shared*; only shared cells can host a capture.
#[derive(Clone, Debug)]
pub struct BoardRules {
    paths: [Vec<CellId>; Color::COUNT],
    lookup: [FxHashMap<CellId, PathIndex>; Color::COUNT],
    shared: FxHashSet<CellId>,
    safe: FxHashSet<CellId>,
    opening_values: SmallVec<[u8; 6]>,
    home_index: PathIndex,
}

impl BoardRules {
    /// Build and validate a rules table.
    ///
    /// `paths` is indexed by [`Color::index`].
    pub fn new(
        paths: [Vec<CellId>; Color::COUNT],
        opening_values: &[u8],
        home_index: u8,
    ) -> Result<Self, RulesError> {
        if home_index < 2 {
            return Err(RulesError::HomeTooShort(home_index));
        }
        let expected = home_index as usize + 1;

        let mut lookup: [FxHashMap<CellId, PathIndex>; Color::COUNT] = Default::default();
        let mut seen_by: FxHashMap<CellId, usize> = FxHashMap::default();

        for color in Color::ALL {
            let path = &paths[color.index()];
            if path.len() != expected {
                return Err(RulesError::PathLength {
                    color,
                    expected,
                    actual: path.len(),
                });
            }
            let map = &mut lookup[color.index()];
            for (i, &cell) in path.iter().enumerate() {
                if map.insert(cell, PathIndex::new(i as u8)).is_some() {
                    return Err(RulesError::DuplicateCell { color, cell });
                }
                *seen_by.entry(cell).or_insert(0) += 1;
            }
        }

        let shared = seen_by
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(cell, _)| cell)
            .collect();

        let mut rules = Self {
            paths,
            lookup,
            shared,
            safe: FxHashSet::default(),
            opening_values: SmallVec::new(),
            home_index: PathIndex::new(home_index),
        };
        rules.set_opening_values(opening_values)?;
        Ok(rules)
    }

    /// Replace the die faces that unlock a piece from base.
    pub fn with_opening_values(mut self, values: &[u8]) -> Result<Self, RulesError> {
        self.set_opening_values(values)?;
        Ok(self)
    }

    /// Mark cells as safe from capture.
    pub fn with_safe_cells(
        mut self,
        cells: impl IntoIterator<Item = CellId>,
    ) -> Result<Self, RulesError> {
        for cell in cells {
            if !self.lookup.iter().any(|m| m.contains_key(&cell)) {
                return Err(RulesError::UnknownSafeCell(cell));
            }
            self.safe.insert(cell);
        }
        Ok(self)
    }

    fn set_opening_values(&mut self, values: &[u8]) -> Result<(), RulesError> {
        if values.is_empty() {
            return Err(RulesError::NoOpeningValues);
        }
        if let Some(&bad) = values.iter().find(|&&v| !(1..=6).contains(&v)) {
            return Err(RulesError::InvalidOpeningValue(bad));
        }
        let mut opening: SmallVec<[u8; 6]> = values.iter().copied().collect();
        opening.sort_unstable();
        opening.dedup();
        self.opening_values = opening;
        Ok(())
    }

    /// Die faces that unlock a piece from base.
    #[must_use]
    pub fn opening_values(&self) -> &[u8] {
        &self.opening_values
    }

    /// Whether a die face unlocks a piece from base.
    #[must_use]
    pub fn is_opening_value(&self, value: u8) -> bool {
        self.opening_values.contains(&value)
    }

    /// The path index that marks a finished piece.
    #[must_use]
    pub fn home_index(&self) -> PathIndex {
        self.home_index
    }

    /// A color's full path, base cell first.
    #[must_use]
    pub fn path(&self, color: Color) -> &[CellId] {
        &self.paths[color.index()]
    }

    /// Cell a piece of `color` occupies at `index`.
    #[must_use]
    pub fn cell(&self, color: Color, index: PathIndex) -> Option<CellId> {
        self.paths[color.index()].get(index.raw() as usize).copied()
    }

    /// Path index of `cell` on `color`'s path, if the path visits it.
    #[must_use]
    pub fn path_index_of(&self, color: Color, cell: CellId) -> Option<PathIndex> {
        self.lookup[color.index()].get(&cell).copied()
    }

    /// Whether more than one color's path visits `cell`.
    #[must_use]
    pub fn is_shared(&self, cell: CellId) -> bool {
        self.shared.contains(&cell)
    }

    /// Whether pieces on `cell` are immune to capture.
    #[must_use]
    pub fn is_safe(&self, cell: CellId) -> bool {
        self.safe.contains(&cell)
    }

    /// Whether a piece landing on `cell` may capture opponents there.
    #[must_use]
    pub fn is_capture_cell(&self, cell: CellId) -> bool {
        self.is_shared(cell) && !self.is_safe(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four tiny paths: private base and home, cells 10..=12 shared by all.
    fn tiny_paths() -> [Vec<CellId>; Color::COUNT] {
        std::array::from_fn(|c| {
            let c = c as u16;
            vec![
                CellId::new(100 + c),
                CellId::new(10),
                CellId::new(11),
                CellId::new(12),
                CellId::new(200 + c),
            ]
        })
    }

    #[test]
    fn test_lookup_round_trip() {
        let rules = BoardRules::new(tiny_paths(), &[6, 1], 4).unwrap();

        assert_eq!(rules.home_index(), PathIndex::new(4));
        assert_eq!(rules.opening_values(), &[1, 6]);
        assert_eq!(rules.cell(Color::Blue, PathIndex::new(4)), Some(CellId::new(203)));
        assert_eq!(rules.path_index_of(Color::Blue, CellId::new(11)), Some(PathIndex::new(2)));
        assert_eq!(rules.path_index_of(Color::Blue, CellId::new(200)), None);
        assert_eq!(rules.cell(Color::Red, PathIndex::new(9)), None);
    }

    #[test]
    fn test_shared_and_safe() {
        let rules = BoardRules::new(tiny_paths(), &[6], 4)
            .unwrap()
            .with_safe_cells([CellId::new(11)])
            .unwrap();

        assert!(rules.is_shared(CellId::new(10)));
        assert!(!rules.is_shared(CellId::new(100)));
        assert!(rules.is_capture_cell(CellId::new(10)));
        assert!(!rules.is_capture_cell(CellId::new(11)));
    }

    #[test]
    fn test_rejects_bad_path_length() {
        let mut paths = tiny_paths();
        paths[Color::Green.index()].pop();
        let err = BoardRules::new(paths, &[6], 4).unwrap_err();
        assert_eq!(
            err,
            RulesError::PathLength {
                color: Color::Green,
                expected: 5,
                actual: 4
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_cell() {
        let mut paths = tiny_paths();
        paths[Color::Red.index()][3] = CellId::new(10);
        assert!(matches!(
            BoardRules::new(paths, &[6], 4),
            Err(RulesError::DuplicateCell { color: Color::Red, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_opening_values() {
        assert_eq!(
            BoardRules::new(tiny_paths(), &[], 4).unwrap_err(),
            RulesError::NoOpeningValues
        );
        assert_eq!(
            BoardRules::new(tiny_paths(), &[0], 4).unwrap_err(),
            RulesError::InvalidOpeningValue(0)
        );
    }

    #[test]
    fn test_rejects_unknown_safe_cell() {
        let rules = BoardRules::new(tiny_paths(), &[6], 4).unwrap();
        assert_eq!(
            rules.with_safe_cells([CellId::new(999)]).unwrap_err(),
            RulesError::UnknownSafeCell(CellId::new(999))
        );
    }
}
