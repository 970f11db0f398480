//! Construction-time errors.
//!
//! The turn/phase machine never fails at runtime: a rejected event is a
//! guard that did not pass. Only the data handed to the engine up front
//! (board tables and game configuration) can be malformed.

use crate::board::CellId;
use crate::core::{Color, PathIndex};

/// Errors raised while building a [`BoardRules`](crate::board::BoardRules) table.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("home index must be at least 2, got {0}")]
    HomeTooShort(u8),

    #[error("{color} path has {actual} cells, expected {expected}")]
    PathLength {
        color: Color,
        expected: usize,
        actual: usize,
    },

    #[error("{color} path visits cell {cell} more than once")]
    DuplicateCell { color: Color, cell: CellId },

    #[error("at least one opening value is required")]
    NoOpeningValues,

    #[error("opening value {0} is not a die face")]
    InvalidOpeningValue(u8),

    #[error("safe cell {0} is not on any path")]
    UnknownSafeCell(CellId),
}

/// Errors raised while validating a [`GameConfig`](crate::core::GameConfig)
/// or a snapshot being resumed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("room id must not be empty")]
    EmptyRoomId,

    #[error("invalid board rules: {0}")]
    Rules(#[from] RulesError),

    #[error("{0} players seated, at most {max} allowed", max = Color::COUNT)]
    TooManyPlayers(usize),

    #[error("color {0} is seated more than once")]
    DuplicateColor(Color),

    #[error("turn {turn} is out of range for {players} players")]
    TurnOutOfRange { turn: usize, players: usize },

    #[error("{color} piece {piece} is at {index}, past home")]
    PieceOutOfRange {
        color: Color,
        piece: usize,
        index: PathIndex,
    },
}
