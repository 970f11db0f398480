//! Player registry and turn order.
//!
//! The roster is an `im::Vector`, so cloning a whole game context is O(1)
//! and every mutation produces a replaced player rather than an aliased one.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::player::{PathIndex, Player, PlayerId};

/// Joined players, in turn order once the game has started.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vector<Player>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether nobody has joined yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Whether every color is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.players.len() >= Color::COUNT
    }

    /// Get the player at a turn-order position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Iterate over players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Check whether a color already has a player.
    #[must_use]
    pub fn is_color_taken(&self, color: Color) -> bool {
        self.players.iter().any(|p| p.color == color)
    }

    /// Colors nobody has claimed, in turn-order priority.
    #[must_use]
    pub fn available_colors(&self) -> Vec<Color> {
        Color::ALL
            .into_iter()
            .filter(|&c| !self.is_color_taken(c))
            .collect()
    }

    /// Seat a new player with all pieces in base.
    ///
    /// Returns false (and leaves the roster unchanged) if the color is taken
    /// or the table is full.
    pub fn join(&mut self, id: PlayerId, color: Color) -> bool {
        if self.is_full() || self.is_color_taken(color) {
            return false;
        }
        self.players.push_back(Player::new(id, color));
        true
    }

    /// Replace one piece's position for the player at `index`.
    ///
    /// Returns false if either index is out of range.
    pub fn set_piece(&mut self, index: usize, piece: usize, position: PathIndex) -> bool {
        let Some(updated) = self.players.get(index).and_then(|p| p.with_piece(piece, position)) else {
            return false;
        };
        self.players.set(index, updated);
        true
    }

    /// Reorder players by rotating the color enumeration so that the player
    /// at `first` leads.
    ///
    /// Seated colors keep their relative order from [`Color::ALL`]; the
    /// sequence simply starts at `first`'s color and wraps around.
    pub fn rotate_to(&mut self, first: usize) {
        let Some(lead) = self.players.get(first).map(|p| p.color) else {
            return;
        };

        let mut ordered: Vec<Player> = self.players.iter().cloned().collect();
        ordered.sort_by_key(|p| p.color);
        let offset = ordered.iter().position(|p| p.color == lead).unwrap_or(0);
        ordered.rotate_left(offset);

        self.players = ordered.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(colors: &[Color]) -> Roster {
        let mut roster = Roster::new();
        for (i, &c) in colors.iter().enumerate() {
            assert!(roster.join(PlayerId::new(format!("p{}", i)), c));
        }
        roster
    }

    fn colors(roster: &Roster) -> Vec<Color> {
        roster.iter().map(|p| p.color).collect()
    }

    #[test]
    fn test_join_rejects_taken_color() {
        let mut roster = seat(&[Color::Red]);
        assert!(!roster.join(PlayerId::new("x"), Color::Red));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_join_rejects_when_full() {
        let mut roster = seat(&Color::ALL);
        assert!(roster.is_full());
        assert!(roster.available_colors().is_empty());
    }

    #[test]
    fn test_available_colors() {
        let roster = seat(&[Color::Yellow, Color::Blue]);
        assert_eq!(roster.available_colors(), vec![Color::Red, Color::Green]);
    }

    #[test]
    fn test_rotate_to_wraps_color_order() {
        let mut roster = seat(&[Color::Blue, Color::Red, Color::Green]);
        // Green leads, then wraps: blue, red
        roster.rotate_to(2);
        assert_eq!(colors(&roster), vec![Color::Green, Color::Blue, Color::Red]);
    }

    #[test]
    fn test_rotate_to_full_table() {
        let mut roster = seat(&Color::ALL);
        roster.rotate_to(1);
        assert_eq!(
            colors(&roster),
            vec![Color::Yellow, Color::Green, Color::Blue, Color::Red]
        );
    }

    #[test]
    fn test_set_piece_replaces_player() {
        let mut roster = seat(&[Color::Red, Color::Yellow]);
        let before = roster.clone();

        assert!(roster.set_piece(1, 3, PathIndex::new(9)));
        assert_eq!(roster.get(1).unwrap().pieces[3], PathIndex::new(9));
        assert_eq!(before.get(1).unwrap().pieces[3], PathIndex::BASE);

        assert!(!roster.set_piece(5, 0, PathIndex::START));
        assert!(!roster.set_piece(0, 4, PathIndex::START));
    }
}
