//! The roll-or-hold capability.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId};

/// What to do next in a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Roll the die again.
    Roll,
    /// Bank the turn total and end the turn.
    Hold,
}

impl Decision {
    /// Parse a typed answer: `r` or `h`, case-insensitive, surrounding
    /// whitespace ignored. Anything else is `None`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "r" => Some(Decision::Roll),
            "h" => Some(Decision::Hold),
            _ => None,
        }
    }
}

/// What a controller sees when asked for a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnView<'a> {
    /// Seat of the deciding player.
    pub player: PlayerId,
    /// Display name of the deciding player.
    pub name: &'a str,
    /// Banked score before this turn.
    pub score: u32,
    /// Unbanked points accumulated so far this turn.
    pub turn_total: u32,
}

/// Supplies roll/hold decisions for one participant.
pub trait Controller {
    /// Decide the next step of the current turn.
    ///
    /// Only fails if the decision channel itself is lost.
    fn decide(&mut self, view: &TurnView<'_>) -> Result<Decision, GameError>;

    /// Short label for logs.
    fn label(&self) -> &'static str;
}
