//! Match engine: turns, turn order, win detection, and time limits.
//!
//! - `turn`: the roll/hold state machine for a single turn
//! - `game`: `TurnBasedMatch` contract and the `PigMatch` controller
//! - `timed`: `TimedMatch`, a wall-clock limit around any match
//! - `clock`: time sources for timed matches
//! - `event`: narration events and observers
//! - `runner`: plays a match to the end

pub mod clock;
pub mod event;
pub mod game;
pub mod runner;
pub mod timed;
pub mod turn;

pub use clock::{Clock, Deadline, ManualClock, SystemClock};
pub use event::{EventLog, GameEvent, GameObserver, NullObserver, WinReason, Winner};
pub use game::{leader, MatchSnapshot, ParticipantSnapshot, PigMatch, TurnBasedMatch};
pub use runner::run_match;
pub use timed::TimedMatch;
pub use turn::{TurnEngine, TurnPhase, TurnResult, BUST_FACE};
