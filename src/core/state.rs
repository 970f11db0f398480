//! Game context: the single value the turn/phase machine owns.
//!
//! ## GameContext
//!
//! - Room id and opening values (fixed at creation)
//! - Roster of players in turn order
//! - Whose turn it is
//! - Pending dice and the legal-move table derived from them
//! - What the last accepted move did (for capture/home routing)
//!
//! The roster is an `im::Vector`, so cloning a context is O(1). Guards
//! read a context; actions take one by value and hand back the next.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::player::{PathIndex, Player};
use super::roster::Roster;
use crate::moves::{DiceList, DiceSequence, LegalMoveTable};

/// The most recent accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    /// Piece index (0..4) of the moving player.
    pub piece: usize,
    pub from: PathIndex,
    pub to: PathIndex,
    /// Dice spent on the move.
    pub dice: DiceSequence,
}

/// Side effects already resolved for the current move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Opponent pieces were sent back to base.
    pub captured: bool,
    /// The moved piece reached home.
    pub reached_home: bool,
}

impl Resolution {
    /// Whether this move earned a bonus roll.
    #[must_use]
    pub fn earns_bonus_roll(self) -> bool {
        self.captured || self.reached_home
    }
}

/// Authoritative game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameContext {
    pub room_id: String,

    /// Die faces that unlock a piece from base. A copy of the board rules'
    /// values for collaborators; reset from the rules on resume.
    pub opening_values: DiceList,

    /// Rolled but unconsumed die values, in roll order.
    pub pending_dice: DiceList,

    /// Turn-order position of the acting player. `None` until the first
    /// turn begins.
    pub current_turn: Option<usize>,

    /// Legal moves for the current player under `pending_dice`.
    pub legal_moves: LegalMoveTable,

    /// Joined players; in turn order once the game has started.
    pub players: Roster,

    pub last_move: Option<MoveRecord>,

    pub resolution: Resolution,
}

impl GameContext {
    /// Create an empty context.
    #[must_use]
    pub fn new(room_id: impl Into<String>, opening_values: &[u8]) -> Self {
        Self {
            room_id: room_id.into(),
            opening_values: opening_values.iter().copied().collect(),
            pending_dice: DiceList::new(),
            current_turn: None,
            legal_moves: LegalMoveTable::new(),
            players: Roster::new(),
            last_move: None,
            resolution: Resolution::default(),
        }
    }

    /// Player whose turn it is, if a turn is under way.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current_turn.and_then(|i| self.players.get(i))
    }

    /// Colors still open for joining.
    #[must_use]
    pub fn available_colors(&self) -> Vec<Color> {
        self.players.available_colors()
    }

    /// The most recent die rolled this turn.
    #[must_use]
    pub fn last_roll(&self) -> Option<u8> {
        self.pending_dice.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_new_context() {
        let ctx = GameContext::new("room1", &[1, 6]);

        assert_eq!(ctx.room_id, "room1");
        assert!(ctx.pending_dice.is_empty());
        assert!(ctx.legal_moves.is_empty());
        assert_eq!(ctx.current_turn, None);
        assert!(ctx.current_player().is_none());
        assert_eq!(ctx.available_colors().len(), 4);
    }

    #[test]
    fn test_current_player() {
        let mut ctx = GameContext::new("r", &[6]);
        ctx.players.join(PlayerId::new("a"), Color::Red);
        ctx.players.join(PlayerId::new("b"), Color::Blue);

        ctx.current_turn = Some(1);
        assert_eq!(ctx.current_player().unwrap().color, Color::Blue);

        ctx.current_turn = Some(2);
        assert!(ctx.current_player().is_none());
    }

    #[test]
    fn test_last_roll() {
        let mut ctx = GameContext::new("r", &[1, 6]);
        assert_eq!(ctx.last_roll(), None);

        ctx.pending_dice.push(6);
        ctx.pending_dice.push(3);
        assert_eq!(ctx.last_roll(), Some(3));
    }

    #[test]
    fn test_resolution_bonus() {
        assert!(!Resolution::default().earns_bonus_roll());
        assert!(Resolution { captured: true, reached_home: false }.earns_bonus_roll());
        assert!(Resolution { captured: false, reached_home: true }.earns_bonus_roll());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut ctx = GameContext::new("r", &[6]);
        ctx.players.join(PlayerId::new("a"), Color::Red);
        let snapshot = ctx.clone();

        ctx.players.set_piece(0, 0, PathIndex::START);
        assert_ne!(ctx, snapshot);
        assert_eq!(snapshot.players.get(0).unwrap().pieces[0], PathIndex::BASE);
    }
}
