//! Computer player heuristic.

use crate::core::{GameConfig, GameError};

use super::decision::{Controller, Decision, TurnView};

/// Hold once the turn total reaches `min(hold_cap, win_threshold - score)`.
///
/// Keeps rolling for a fixed cap of points per turn, but stops as soon as
/// banking would reach the winning score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoldAtThreshold {
    hold_cap: u32,
    win_threshold: u32,
}

impl Default for HoldAtThreshold {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl HoldAtThreshold {
    /// Create a heuristic with explicit constants.
    #[must_use]
    pub const fn new(hold_cap: u32, win_threshold: u32) -> Self {
        Self {
            hold_cap,
            win_threshold,
        }
    }

    /// Create a heuristic from the match configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.hold_cap, config.win_threshold)
    }

    /// Turn total at which to hold, given the banked score.
    #[must_use]
    pub fn threshold(&self, score: u32) -> u32 {
        self.hold_cap.min(self.win_threshold.saturating_sub(score))
    }

    /// Pure decision rule.
    #[must_use]
    pub fn choose(&self, score: u32, turn_total: u32) -> Decision {
        if turn_total >= self.threshold(score) {
            Decision::Hold
        } else {
            Decision::Roll
        }
    }
}

impl Controller for HoldAtThreshold {
    fn decide(&mut self, view: &TurnView<'_>) -> Result<Decision, GameError> {
        Ok(self.choose(view.score, view.turn_total))
    }

    fn label(&self) -> &'static str {
        "computer"
    }
}
