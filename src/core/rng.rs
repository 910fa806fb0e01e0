//! Dice randomness.
//!
//! ## Key Features
//!
//! - **Injected**: Each match owns its own source; nothing reseeds global state
//! - **Deterministic**: Same seed produces identical roll sequence
//! - **Scriptable**: `ScriptedDice` replays a fixed sequence for exact tests
//!
//! ```
//! use pig_dice::core::{DiceRng, RandomSource};
//!
//! let mut a = DiceRng::new(42);
//! let mut b = DiceRng::new(42);
//!
//! let seq_a: Vec<_> = (0..10).map(|_| a.roll(6)).collect();
//! let seq_b: Vec<_> = (0..10).map(|_| b.roll(6)).collect();
//! assert_eq!(seq_a, seq_b);
//! ```
//!
//! A source carries mutable generator state, so concurrent matches must each
//! own their own instance.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of die rolls.
pub trait RandomSource {
    /// Roll a die with `sides` faces, returning a value in `1..=sides`.
    fn roll(&mut self, sides: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn roll(&mut self, sides: u32) -> u32 {
        (**self).roll(sides)
    }
}

/// Seeded ChaCha8 dice.
///
/// Seeded once at construction and never reset afterwards.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create dice with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create dice seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed these dice were created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for DiceRng {
    fn roll(&mut self, sides: u32) -> u32 {
        self.inner.gen_range(1..=sides)
    }
}

/// Dice that replay a fixed sequence, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create scripted dice. Panics on an empty sequence.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "Scripted dice need at least one value");
        Self { values, cursor: 0 }
    }

    /// Number of rolls produced so far.
    #[must_use]
    pub fn rolls_made(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedDice {
    fn roll(&mut self, sides: u32) -> u32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        debug_assert!(
            (1..=sides).contains(&value),
            "scripted value {value} outside 1..={sides}"
        );
        value
    }
}
