//! # pig-dice
//!
//! Engine for Pig, the two-player dice game.
//!
//! On your turn you roll a die as often as you like, adding each roll to a
//! turn total. Holding banks the turn total; rolling a 1 loses it and ends
//! the turn. The first player to bank 100 points wins. A timed match ends
//! after 60 seconds with the highest score winning.
//!
//! ## Design
//!
//! - **Injected randomness**: Each match owns its dice (`RandomSource`),
//!   seeded once. Tests use `ScriptedDice` for exact roll sequences.
//! - **Controllers, not type checks**: Participants decide through the
//!   `Controller` capability; the engine never asks which kind it holds.
//! - **Explicit terminal state**: A timed-out match records its winner and
//!   reports it through `check_winner` like a normal win.
//!
//! ## Modules
//!
//! - `core`: Player IDs, participants, configuration, dice, errors
//! - `policy`: Roll/hold decisions (computer heuristic, interactive input)
//! - `engine`: Turn state machine, match control, time limits, events
//! - `cli`: Argument parsing and console front end

pub mod cli;
pub mod core;
pub mod engine;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DiceRng, GameConfig, GameError, Participant, PlayerId, PlayerKind,
    RandomSource, ScriptedDice,
};

pub use crate::policy::{
    Controller, Decision, DecisionInput, HoldAtThreshold, Interactive, ScriptedInput, TurnView,
};

pub use crate::engine::{
    run_match, EventLog, GameEvent, GameObserver, ManualClock, MatchSnapshot, NullObserver,
    PigMatch, SystemClock, TimedMatch, TurnBasedMatch, TurnEngine, TurnResult, WinReason, Winner,
};
