//! Game configuration.
//!
//! A game is configured once, before the machine is created:
//! - `room_id`: Session identifier echoed in snapshots
//! - `seed`: Dice/turn-order seed (random when unset)
//! - `rules`: The board rules table
//!
//! ```
//! use ludo_engine::core::GameConfig;
//!
//! let config = GameConfig::new("room1")
//!     .with_seed(7)
//!     .with_opening_values(&[6])
//!     .unwrap();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.rules.opening_values(), &[6]);
//! ```

use crate::board::BoardRules;
use crate::error::ConfigError;

/// Room id used when none is supplied.
pub const DEFAULT_ROOM_ID: &str = "local";

/// Everything needed to start a machine.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Session identifier, opaque to the engine.
    pub room_id: String,

    /// RNG seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Board rules table.
    pub rules: BoardRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOM_ID)
    }
}

impl GameConfig {
    /// Standard board, random seed.
    #[must_use]
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            seed: None,
            rules: BoardRules::standard(),
        }
    }

    /// Fix the RNG seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom board rules table.
    #[must_use]
    pub fn with_rules(mut self, rules: BoardRules) -> Self {
        self.rules = rules;
        self
    }

    /// Override the die faces that unlock a piece from base.
    pub fn with_opening_values(mut self, values: &[u8]) -> Result<Self, ConfigError> {
        self.rules = self.rules.with_opening_values(values)?;
        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_id.trim().is_empty() {
            return Err(ConfigError::EmptyRoomId);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulesError;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.room_id, DEFAULT_ROOM_ID);
        assert_eq!(config.seed, None);
        assert_eq!(config.rules.opening_values(), &[1, 6]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new("room1").with_seed(99);
        assert_eq!(config.room_id, "room1");
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_rejects_empty_room() {
        assert_eq!(
            GameConfig::new("  ").validate(),
            Err(ConfigError::EmptyRoomId)
        );
    }

    #[test]
    fn test_rejects_bad_opening_values() {
        let err = GameConfig::new("r").with_opening_values(&[7]).unwrap_err();
        assert_eq!(err, ConfigError::Rules(RulesError::InvalidOpeningValue(7)));
    }
}
