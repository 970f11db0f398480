//! The classic four-color board.
//!
//! ```text
//! index 0        base cell (private)
//! index 1..=51   shared ring, starting at the color's entry square
//! index 52..=56  home stretch (private)
//! index 57       home (private)
//! ```
//!
//! Each color enters the 52-cell ring a quarter-turn after the previous
//! color in turn order. Entry squares and the star square eight cells past
//! each entry are safe.

use super::rules::{BoardRules, CellId};
use crate::core::Color;

/// Cells on the shared ring.
pub const STANDARD_RING_LEN: u16 = 52;

/// Path index of home on the standard board.
pub const STANDARD_HOME: u8 = 57;

/// Die faces that unlock a piece on the standard board.
pub const STANDARD_OPENING_VALUES: [u8; 2] = [1, 6];

const RING_STEPS: u8 = 51;
const STRETCH_LEN: u16 = 5;
const QUARTER: u16 = STANDARD_RING_LEN / 4;
const STAR_OFFSET: u16 = 8;

const BASE_CELLS: u16 = 100;
const STRETCH_CELLS: u16 = 200;
const HOME_CELLS: u16 = 300;

fn entry_cell(color: Color) -> CellId {
    CellId::new(color.index() as u16 * QUARTER)
}

fn standard_path(color: Color) -> Vec<CellId> {
    let c = color.index() as u16;
    let entry = entry_cell(color).raw();

    let mut path = Vec::with_capacity(STANDARD_HOME as usize + 1);
    path.push(CellId::new(BASE_CELLS + c));
    path.extend((0..RING_STEPS as u16).map(|i| CellId::new((entry + i) % STANDARD_RING_LEN)));
    path.extend((0..STRETCH_LEN).map(|i| CellId::new(STRETCH_CELLS + c * 10 + i)));
    path.push(CellId::new(HOME_CELLS + c));
    path
}

impl BoardRules {
    /// The classic board: 57-step paths, opening values {1, 6}, safe entry
    /// and star squares.
    #[must_use]
    pub fn standard() -> Self {
        let safe: Vec<CellId> = Color::ALL
            .into_iter()
            .flat_map(|color| {
                let entry = entry_cell(color).raw();
                [
                    CellId::new(entry),
                    CellId::new((entry + STAR_OFFSET) % STANDARD_RING_LEN),
                ]
            })
            .collect();

        // The layout is fixed and internally consistent.
        BoardRules::new(
            std::array::from_fn(|i| standard_path(Color::ALL[i])),
            &STANDARD_OPENING_VALUES,
            STANDARD_HOME,
        )
        .and_then(|rules| rules.with_safe_cells(safe))
        .expect("standard board layout is valid")
    }
}

impl Default for BoardRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PathIndex;

    #[test]
    fn test_standard_dimensions() {
        let rules = BoardRules::standard();
        assert_eq!(rules.home_index(), PathIndex::new(57));
        assert_eq!(rules.opening_values(), &[1, 6]);
        for color in Color::ALL {
            assert_eq!(rules.path(color).len(), 58);
        }
    }

    #[test]
    fn test_entry_squares_are_offset() {
        let rules = BoardRules::standard();
        assert_eq!(rules.cell(Color::Red, PathIndex::START), Some(CellId::new(0)));
        assert_eq!(rules.cell(Color::Yellow, PathIndex::START), Some(CellId::new(13)));
        assert_eq!(rules.cell(Color::Blue, PathIndex::START), Some(CellId::new(39)));
    }

    #[test]
    fn test_ring_wraps() {
        let rules = BoardRules::standard();
        // Blue enters at 39; thirteen steps on wraps past 51 to 0
        assert_eq!(rules.cell(Color::Blue, PathIndex::new(14)), Some(CellId::new(0)));
        // Red turns off the ring one cell short of a full lap
        assert_eq!(rules.cell(Color::Red, PathIndex::new(51)), Some(CellId::new(50)));
    }

    #[test]
    fn test_shared_ring_private_stretch() {
        let rules = BoardRules::standard();
        let ring = rules.cell(Color::Red, PathIndex::new(20)).unwrap();
        let stretch = rules.cell(Color::Red, PathIndex::new(53)).unwrap();
        let home = rules.cell(Color::Red, PathIndex::new(57)).unwrap();

        assert!(rules.is_shared(ring));
        assert!(!rules.is_shared(stretch));
        assert!(!rules.is_shared(home));
        assert_eq!(ring, CellId::new(19));
        assert_eq!(rules.path_index_of(Color::Yellow, ring), Some(PathIndex::new(7)));
    }

    #[test]
    fn test_safe_squares() {
        let rules = BoardRules::standard();
        for color in Color::ALL {
            let entry = rules.cell(color, PathIndex::START).unwrap();
            let star = rules.cell(color, PathIndex::new(9)).unwrap();
            assert!(rules.is_safe(entry));
            assert!(rules.is_safe(star));
        }
        assert!(rules.is_capture_cell(CellId::new(5)));
    }
}
