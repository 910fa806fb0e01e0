//! Decision policies for participants.
//!
//! Every participant owns a `Controller` that answers one question per step
//! of a turn: roll again or hold. The turn engine depends only on that
//! capability, never on which variant sits behind it.
//!
//! - `HoldAtThreshold`: the computer player's fixed heuristic
//! - `Interactive`: asks an external `DecisionInput` (console, UI)

pub mod decision;
pub mod heuristic;
pub mod interactive;

pub use decision::{Controller, Decision, TurnView};
pub use heuristic::HoldAtThreshold;
pub use interactive::{DecisionInput, Interactive, ScriptedInput};
