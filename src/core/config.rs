//! Game configuration.
//!
//! The rules constants live in `GameConfig`. They are fixed for a given
//! build of the binary; only the library constructor lets tests tune them.
//!
//! `PlayerKind` is the one runtime choice: who controls each seat.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Rules constants for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cumulative score that wins the match.
    pub win_threshold: u32,

    /// Number of faces on the die.
    pub die_sides: u32,

    /// Turn total at which the computer player banks, before the
    /// remaining-points-to-win cap applies.
    pub hold_cap: u32,

    /// Wall-clock budget for timed matches.
    pub time_limit: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_threshold: 100,
            die_sides: 6,
            hold_cap: 25,
            time_limit: Duration::from_secs(60),
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Set the number of die faces.
    #[must_use]
    pub fn with_die_sides(mut self, sides: u32) -> Self {
        assert!(sides >= 2, "A die needs at least 2 sides");
        self.die_sides = sides;
        self
    }

    /// Set the computer player's hold cap.
    #[must_use]
    pub fn with_hold_cap(mut self, cap: u32) -> Self {
        self.hold_cap = cap;
        self
    }

    /// Set the timed-match budget.
    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }
}

/// Who controls a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Decisions typed at the console.
    Human,
    /// Decisions made by the hold-at-threshold heuristic.
    Computer,
}

impl FromStr for PlayerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "computer" => Ok(PlayerKind::Computer),
            _ => Err(ConfigError::UnknownPlayerKind(s.to_string())),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => f.write_str("human"),
            PlayerKind::Computer => f.write_str("computer"),
        }
    }
}
