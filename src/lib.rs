//! # ludo-engine
//!
//! Turn/phase engine and legal-move calculator for a 2–4 player Ludo game.
//!
//! ## Design Principles
//!
//! 1. **Rules as Data**: The board (paths, safe cells, opening values, home
//!    index) is a `BoardRules` table supplied at startup. The engine never
//!    hardcodes board geometry outside `board::standard`.
//!
//! 2. **Closed Guards and Actions**: Transitions reference guards and
//!    actions by enum variant, so the transition table is exhaustive and
//!    checked at compile time.
//!
//! 3. **Context by Value**: Actions take the context and return the next
//!    one. A rejected event leaves the previous context untouched.
//!
//! ## Architecture
//!
//! - **Legal-move table**: every ordered subset of the pending dice is
//!   projected against each of the current player's pieces. Moves are
//!   checked against the table before anything is mutated.
//!
//! - **Run to stable**: after each accepted event the machine follows
//!   automatic transitions until none applies.
//!
//! - **Persistent Data Structures**: the roster is an `im::Vector`, so
//!   snapshots and speculative checks clone cheaply.
//!
//! ## Modules
//!
//! - `core`: Colors, players, roster, context, RNG, configuration
//! - `board`: Board rules table and the standard layout
//! - `moves`: Dice sequences, permutation enumerator, projector, legal moves
//! - `rules`: Phases, events, guards, actions and the `LudoMachine`
//! - `error`: Construction-time errors

pub mod core;
pub mod board;
pub mod moves;
pub mod rules;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Color, PathIndex, Player, PlayerId, Roster,
    GameRng, GameRngState, Randomness, ScriptedRng,
    GameConfig, GameContext, MoveRecord, Resolution,
};

pub use crate::board::{BoardRules, CellId};

pub use crate::moves::{
    enumerate_sequences, DiceList, DiceSequence, LegalMoveEntry, LegalMoveTable, Projection,
    Projector,
};

pub use crate::rules::{Event, EventKind, LudoMachine, Phase, Snapshot};

pub use crate::error::{ConfigError, RulesError};
