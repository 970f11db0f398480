//! Legal-move calculation.
//!
//! - `sequence`: Structural dice-sequence keys
//! - `permutations`: Every ordering of every subset of the pending dice
//! - `projector`: Where one sequence takes one piece
//! - `table`: The per-turn legal-move table built from both
//!
//! Nothing here knows about phases or players; it is pure over dice values,
//! path indices, and the step rules.

mod permutations;
mod projector;
mod sequence;
mod table;

pub use permutations::enumerate_sequences;
pub use projector::{Projection, Projector};
pub use sequence::{DiceList, DiceSequence};
pub use table::{LegalMoveEntry, LegalMoveTable};
