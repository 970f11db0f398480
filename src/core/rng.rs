//! Random number generation for dice and turn order.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Serializable**: O(1) state capture and restore
//! - **Scriptable**: [`ScriptedRng`] replays fixed rolls (tests, replays
//!   driven by an external authority)
//!
//! ```
//! use ludo_engine::core::{GameRng, Randomness};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Highest face on a die.
pub const DIE_FACES: u8 = 6;

/// Source of every random decision the machine makes.
pub trait Randomness {
    /// Roll one die: a value in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Uniform index in `0..len`, `None` for an empty range.
    fn gen_index(&mut self, len: usize) -> Option<usize>;
}

/// Deterministic RNG backing every random decision the engine makes.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Randomness for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    fn gen_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }
}

/// Replays scripted rolls and picks, then falls back to a seeded [`GameRng`].
///
/// ```
/// use ludo_engine::core::{Randomness, ScriptedRng};
///
/// let mut rng = ScriptedRng::new([6, 4]).with_picks([1]);
/// assert_eq!(rng.roll_die(), 6);
/// assert_eq!(rng.roll_die(), 4);
/// assert_eq!(rng.gen_index(3), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    rolls: VecDeque<u8>,
    picks: VecDeque<usize>,
    fallback: GameRng,
}

impl ScriptedRng {
    /// Script die rolls. Values are clamped to `1..=6`.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().map(|r| r.clamp(1, DIE_FACES)).collect(),
            picks: VecDeque::new(),
            fallback: GameRng::new(0),
        }
    }

    /// Script index picks (e.g. who moves first). Reduced modulo the range.
    #[must_use]
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks = picks.into_iter().collect();
        self
    }

    /// Scripted rolls not yet consumed.
    #[must_use]
    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl Randomness for ScriptedRng {
    fn roll_die(&mut self) -> u8 {
        match self.rolls.pop_front() {
            Some(roll) => roll,
            None => self.fallback.roll_die(),
        }
    }

    fn gen_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self.picks.pop_front() {
            Some(pick) => Some(pick % len),
            None => self.fallback.gen_index(len),
        }
    }
}

/// Serializable RNG state.
///
/// Uses ChaCha8 word position so the size is constant regardless of how
/// many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
