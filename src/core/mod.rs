//! Core types: players, participants, configuration, dice, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, PlayerKind};
pub use error::{ConfigError, GameError};
pub use player::{Participant, PlayerId};
pub use rng::{DiceRng, RandomSource, ScriptedDice};
