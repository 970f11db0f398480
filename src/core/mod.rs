//! Core engine types: colors, players, roster, state, RNG, configuration.
//!
//! These are the data the turn/phase machine owns. They know nothing about
//! phases; all mutation during a game goes through `rules`.

pub mod color;
pub mod player;
pub mod roster;
pub mod rng;
pub mod config;
pub mod state;

pub use color::Color;
pub use player::{PathIndex, Player, PlayerId, PIECES_PER_PLAYER};
pub use roster::Roster;
pub use rng::{GameRng, GameRngState, Randomness, ScriptedRng, DIE_FACES};
pub use config::{GameConfig, DEFAULT_ROOM_ID};
pub use state::{GameContext, MoveRecord, Resolution};
