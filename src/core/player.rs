//! Player identification and piece positions.
//!
//! ## PathIndex
//!
//! A piece's offset along its own color's path: `0` is base, the board's
//! home index (57 on the standard board) is home, everything in between is
//! on the path.
//!
//! ## Player
//!
//! A seated player: opaque identity, color, and exactly four pieces.
//! Players are values; the registry replaces them wholesale on every move.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Number of pieces each player owns.
pub const PIECES_PER_PLAYER: usize = 4;

/// Opaque player identity supplied by the session layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Position of a piece along its color's path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathIndex(pub u8);

impl PathIndex {
    /// A piece that has not yet entered the path.
    pub const BASE: PathIndex = PathIndex(0);

    /// The first square of the path, where unlocked pieces land.
    pub const START: PathIndex = PathIndex(1);

    /// Create a new path index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Whether the piece is still in base.
    #[must_use]
    pub const fn is_base(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for PathIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub color: Color,
    pub pieces: [PathIndex; PIECES_PER_PLAYER],
}

impl Player {
    /// Create a player with every piece in base.
    #[must_use]
    pub fn new(id: PlayerId, color: Color) -> Self {
        Self {
            id,
            color,
            pieces: [PathIndex::BASE; PIECES_PER_PLAYER],
        }
    }

    /// Copy of this player with one piece moved.
    ///
    /// Returns `None` if `piece` is not a valid piece index.
    #[must_use]
    pub fn with_piece(&self, piece: usize, index: PathIndex) -> Option<Self> {
        if piece >= PIECES_PER_PLAYER {
            return None;
        }
        let mut pieces = self.pieces;
        pieces[piece] = index;
        Some(Self {
            id: self.id.clone(),
            color: self.color,
            pieces,
        })
    }

    /// Whether every piece sits on `home`.
    #[must_use]
    pub fn all_home(&self, home: PathIndex) -> bool {
        self.pieces.iter().all(|&p| p == home)
    }
}
