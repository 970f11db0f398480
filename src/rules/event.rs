//! Events accepted by the machine.

use serde::{Deserialize, Serialize};

use crate::board::CellId;
use crate::core::{Color, PlayerId};

/// An external request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    /// Begin the game.
    Start,
    /// Ask to take a seat.
    JoinGame,
    /// Commit the color for a pending join.
    #[serde(rename_all = "camelCase")]
    ColorConfirmed { color: Color, player_id: PlayerId },
    /// Roll a die for the current player.
    RollDice,
    /// Move one of the current player's pieces to a board cell.
    PieceMoved { piece: usize, cell: CellId },
}

/// Payload-free discriminant of [`Event`], used to index the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Start,
    JoinGame,
    ColorConfirmed,
    RollDice,
    PieceMoved,
}

impl Event {
    /// Create a color confirmation.
    #[must_use]
    pub fn color_confirmed(color: Color, player_id: impl Into<String>) -> Self {
        Event::ColorConfirmed {
            color,
            player_id: PlayerId::new(player_id),
        }
    }

    /// Create a piece move.
    #[must_use]
    pub fn piece_moved(piece: usize, cell: CellId) -> Self {
        Event::PieceMoved { piece, cell }
    }

    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Start => EventKind::Start,
            Event::JoinGame => EventKind::JoinGame,
            Event::ColorConfirmed { .. } => EventKind::ColorConfirmed,
            Event::RollDice => EventKind::RollDice,
            Event::PieceMoved { .. } => EventKind::PieceMoved,
        }
    }
}
