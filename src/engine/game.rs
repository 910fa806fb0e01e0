//! Match control: turn order and win detection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DiceRng, GameConfig, GameError, Participant, RandomSource};

use super::event::{GameEvent, GameObserver, NullObserver, WinReason, Winner};
use super::turn::{TurnEngine, TurnResult};

/// The play-a-turn / check-for-a-winner contract.
///
/// `PigMatch` implements it directly; `TimedMatch` wraps any implementation
/// and adds a deadline.
pub trait TurnBasedMatch {
    /// Play the active participant's turn and pass play to the next seat.
    ///
    /// Returns `None` when no turn was played because the match is already
    /// over.
    fn play_turn(&mut self) -> Result<Option<TurnResult>, GameError>;

    /// The winner, if the match is over. Calling it has no side effects.
    fn check_winner(&self) -> Option<Winner>;

    /// Participants in seat order.
    fn participants(&self) -> &[Participant];

    /// Seat whose turn is next.
    fn active_index(&self) -> usize;

    /// Completed turns so far.
    fn turn_number(&self) -> u32;

    /// Send an event to the match's observer.
    fn emit(&mut self, event: GameEvent);

    /// Serializable view of the current state.
    fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            participants: self
                .participants()
                .iter()
                .map(|p| ParticipantSnapshot {
                    name: p.name().to_string(),
                    kind: p.kind_label().to_string(),
                    score: p.score(),
                })
                .collect(),
            active_index: self.active_index(),
            turn_number: self.turn_number(),
            winner: self.check_winner(),
        }
    }
}

/// Point-in-time view of one participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSnapshot {
    pub name: String,
    pub kind: String,
    pub score: u32,
}

/// Point-in-time view of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub participants: Vec<ParticipantSnapshot>,
    pub active_index: usize,
    pub turn_number: u32,
    pub winner: Option<Winner>,
}

/// Participant with the highest score; ties go to the earliest seat.
///
/// Panics if `participants` is empty.
#[must_use]
pub fn leader(participants: &[Participant]) -> &Participant {
    let mut best = &participants[0];
    for p in &participants[1..] {
        if p.score() > best.score() {
            best = p;
        }
    }
    best
}

/// A Pig match between participants taking turns in seat order.
///
/// Needs at least one participant; the rules are written for two.
pub struct PigMatch<R = DiceRng> {
    participants: Vec<Participant>,
    active_index: usize,
    turn_number: u32,
    config: GameConfig,
    engine: TurnEngine,
    rng: R,
    observer: Box<dyn GameObserver>,
}

impl<R: RandomSource> PigMatch<R> {
    /// Create a match with the standard rules.
    ///
    /// Panics if `participants` is empty.
    pub fn new(participants: Vec<Participant>, rng: R) -> Self {
        assert!(!participants.is_empty(), "Must have at least 1 player");
        assert!(participants.len() <= 255, "At most 255 players supported");

        let config = GameConfig::default();
        Self {
            participants,
            active_index: 0,
            turn_number: 0,
            engine: TurnEngine::from_config(&config),
            config,
            rng,
            observer: Box::new(NullObserver),
        }
    }

    /// Replace the rules constants.
    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.engine = TurnEngine::from_config(&config);
        self.config = config;
        self
    }

    /// Send events to `observer`.
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn GameObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Rules constants in effect.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The match's dice.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }
}

impl<R: RandomSource> TurnBasedMatch for PigMatch<R> {
    fn play_turn(&mut self) -> Result<Option<TurnResult>, GameError> {
        let index = self.active_index;
        let participant = &mut self.participants[index];
        let result = self.engine.run(participant, &mut self.rng, self.observer.as_mut())?;

        participant.apply_score(result.earned_points);
        debug!(
            player = %participant.id(),
            earned = result.earned_points,
            score = participant.score(),
            "Turn complete"
        );

        // Rotation happens whether the turn held or busted.
        self.active_index = (index + 1) % self.participants.len();
        self.turn_number += 1;
        Ok(Some(result))
    }

    fn check_winner(&self) -> Option<Winner> {
        // Seat order, not turn order: the earliest seat over the line wins.
        self.participants
            .iter()
            .find(|p| p.score() >= self.config.win_threshold)
            .map(|p| Winner {
                player: p.id(),
                name: p.name().to_string(),
                score: p.score(),
                reason: WinReason::Threshold,
            })
    }

    fn participants(&self) -> &[Participant] {
        &self.participants
    }

    fn active_index(&self) -> usize {
        self.active_index
    }

    fn turn_number(&self) -> u32 {
        self.turn_number
    }

    fn emit(&mut self, event: GameEvent) {
        self.observer.on_event(&event);
    }
}
