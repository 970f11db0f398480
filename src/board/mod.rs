//! Board Rules Table.
//!
//! The core never hardcodes board geometry. It reads:
//! - Each color's ordered path of cells (base cell first, home cell last)
//! - Which die faces unlock a piece from base
//! - Which cells are safe from capture
//!
//! [`BoardRules::standard`] supplies the classic four-color layout.

mod rules;
mod standard;

pub use rules::{BoardRules, CellId};
pub use standard::{STANDARD_HOME, STANDARD_OPENING_VALUES, STANDARD_RING_LEN};
