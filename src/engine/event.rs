//! Match events and observers.
//!
//! Events narrate what happens during a match: every roll, busts, holds,
//! the clock running out, and the final winner. They are transient; the
//! engine hands each one to the match's `GameObserver` and keeps nothing.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// How a match was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner reached the win threshold.
    Threshold,
    /// The time limit ran out and the winner had the highest score.
    TimeExpired,
}

/// Result of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub player: PlayerId,
    pub name: String,
    pub score: u32,
    pub reason: WinReason,
}

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A non-bust roll was added to the turn total.
    Rolled {
        player: PlayerId,
        name: String,
        value: u32,
        turn_total: u32,
        /// Banked score plus the current turn total.
        grand_total: u32,
    },
    /// A 1 was rolled; the turn total is lost.
    Bust { player: PlayerId, name: String },
    /// The player banked the turn total.
    Held {
        player: PlayerId,
        name: String,
        banked: u32,
        total: u32,
    },
    /// A timed match ran past its limit.
    TimeExpired { elapsed: Duration },
    /// The match is over.
    Winner(Winner),
}

/// Receives match events.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Observer that records events.
///
/// Clones share the same log, so a test can keep one handle and give the
/// other to the match.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Number of events recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// True if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Roll values recorded so far, in order. Busts count as 1.
    #[must_use]
    pub fn rolls(&self) -> Vec<u32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                GameEvent::Rolled { value, .. } => Some(*value),
                GameEvent::Bust { .. } => Some(1),
                _ => None,
            })
            .collect()
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
