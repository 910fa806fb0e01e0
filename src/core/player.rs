//! Player identification and participants.
//!
//! ## PlayerId
//!
//! Seat index in turn order, 0-based.
//!
//! ## Participant
//!
//! A named seat with a banked score and a `Controller` that makes its
//! roll/hold decisions. Created once at match start and kept for the
//! whole match.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::policy::{Controller, Decision, DecisionInput, HoldAtThreshold, Interactive, TurnView};

use super::error::GameError;

/// Seat identifier. The first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for `player_count` players.
    ///
    /// ```
    /// use pig_dice::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// A player in a match.
pub struct Participant {
    id: PlayerId,
    name: String,
    score: u32,
    controller: Box<dyn Controller>,
}

impl Participant {
    /// Create a participant with any controller.
    pub fn new(id: PlayerId, name: impl Into<String>, controller: Box<dyn Controller>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            controller,
        }
    }

    /// Create a computer participant using the given heuristic.
    pub fn computer(id: PlayerId, name: impl Into<String>, policy: HoldAtThreshold) -> Self {
        Self::new(id, name, Box::new(policy))
    }

    /// Create a participant whose decisions come from `input`.
    pub fn interactive<I>(id: PlayerId, name: impl Into<String>, input: I) -> Self
    where
        I: DecisionInput + 'static,
    {
        Self::new(id, name, Box::new(Interactive::new(input)))
    }

    /// Seat of this participant.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Banked score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Controller label ("human" / "computer").
    #[must_use]
    pub fn kind_label(&self) -> &'static str {
        self.controller.label()
    }

    /// Bank points from a completed turn. Scores never decrease.
    pub fn apply_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Ask this participant's controller for the next step of its turn.
    pub fn decide(&mut self, turn_total: u32) -> Result<Decision, GameError> {
        let view = TurnView {
            player: self.id,
            name: &self.name,
            score: self.score,
            turn_total,
        };
        self.controller.decide(&view)
    }
}

impl fmt::Debug for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Participant")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("score", &self.score)
            .field("controller", &self.controller.label())
            .finish()
    }
}
