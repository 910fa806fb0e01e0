//! One player's turn.
//!
//! ```text
//!                 roll, value != 1
//!               +-----------------+
//!               v                 |
//! AwaitingDecision --roll--> Rolled(value)
//!        |                        |
//!      hold                   value == 1
//!        v                        v
//!      Held                     Bust
//! ```
//!
//! `Held` banks the turn total; `Bust` banks nothing. Unrecognized
//! interactive input never reaches the engine: the controller asks again.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameConfig, GameError, Participant, PlayerId, RandomSource};
use crate::policy::Decision;

use super::event::{GameEvent, GameObserver};

/// Face that ends a turn with nothing banked.
pub const BUST_FACE: u32 = 1;

/// States of a turn in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for the participant to roll or hold.
    AwaitingDecision,
    /// The die came up with this value.
    Rolled(u32),
    /// Rolled a 1. Terminal.
    Bust,
    /// Banked the turn total. Terminal.
    Held,
}

/// Outcome of a completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    pub player: PlayerId,
    /// Points to bank. Always 0 when `busted`.
    pub earned_points: u32,
    pub busted: bool,
    /// Every die value rolled this turn, including a final 1 on bust.
    pub rolls: Vec<u32>,
}

/// Runs turns to completion.
#[derive(Clone, Copy, Debug)]
pub struct TurnEngine {
    die_sides: u32,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl TurnEngine {
    /// Create an engine for a die with `die_sides` faces.
    #[must_use]
    pub const fn new(die_sides: u32) -> Self {
        Self { die_sides }
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.die_sides)
    }

    /// Play `participant`'s turn until they hold or bust.
    ///
    /// Does not bank the result; the caller applies `earned_points`.
    pub fn run<R>(
        &self,
        participant: &mut Participant,
        rng: &mut R,
        observer: &mut dyn GameObserver,
    ) -> Result<TurnResult, GameError>
    where
        R: RandomSource + ?Sized,
    {
        let player = participant.id();
        let mut phase = TurnPhase::AwaitingDecision;
        let mut turn_total = 0;
        let mut rolls = Vec::new();

        loop {
            match phase {
                TurnPhase::AwaitingDecision => {
                    let decision = participant.decide(turn_total)?;
                    debug!(%player, ?decision, turn_total, "Decision");
                    phase = match decision {
                        Decision::Roll => TurnPhase::Rolled(rng.roll(self.die_sides)),
                        Decision::Hold => TurnPhase::Held,
                    };
                }
                TurnPhase::Rolled(value) => {
                    rolls.push(value);
                    if value == BUST_FACE {
                        phase = TurnPhase::Bust;
                        continue;
                    }
                    turn_total += value;
                    debug!(%player, value, turn_total, "Rolled");
                    observer.on_event(&GameEvent::Rolled {
                        player,
                        name: participant.name().to_string(),
                        value,
                        turn_total,
                        grand_total: participant.score() + turn_total,
                    });
                    phase = TurnPhase::AwaitingDecision;
                }
                TurnPhase::Bust => {
                    info!(%player, lost = turn_total, "Bust");
                    observer.on_event(&GameEvent::Bust {
                        player,
                        name: participant.name().to_string(),
                    });
                    return Ok(TurnResult {
                        player,
                        earned_points: 0,
                        busted: true,
                        rolls,
                    });
                }
                TurnPhase::Held => {
                    info!(%player, banked = turn_total, "Hold");
                    observer.on_event(&GameEvent::Held {
                        player,
                        name: participant.name().to_string(),
                        banked: turn_total,
                        total: participant.score() + turn_total,
                    });
                    return Ok(TurnResult {
                        player,
                        earned_points: turn_total,
                        busted: false,
                        rolls,
                    });
                }
            }
        }
    }
}
