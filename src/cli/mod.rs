//! Command-line front end: argument parsing, console I/O, and match setup.

pub mod args;
pub mod console;
pub mod logging;

pub use args::Args;
pub use console::{describe, ConsoleNarrator, StdinInput};
pub use logging::init_logging;

use crate::core::{DiceRng, GameConfig, Participant, PlayerId, PlayerKind};
use crate::engine::{PigMatch, TimedMatch, TurnBasedMatch};
use crate::policy::HoldAtThreshold;

/// Display name for a seat: "Player 1", "Player 2", ...
#[must_use]
pub fn seat_name(id: PlayerId) -> String {
    format!("Player {}", id.index() + 1)
}

/// Create a console participant of the given kind.
pub fn console_participant(id: PlayerId, kind: PlayerKind, config: &GameConfig) -> Participant {
    match kind {
        PlayerKind::Human => Participant::interactive(id, seat_name(id), StdinInput),
        PlayerKind::Computer => {
            Participant::computer(id, seat_name(id), HoldAtThreshold::from_config(config))
        }
    }
}

/// Assemble the match described by `args`, narrated to the console.
pub fn build_match(args: &Args) -> Box<dyn TurnBasedMatch> {
    let config = GameConfig::default();
    let participants = PlayerId::all(2)
        .zip(args.seats())
        .map(|(id, kind)| console_participant(id, kind, &config))
        .collect();

    let game = PigMatch::new(participants, DiceRng::from_entropy())
        .with_config(config.clone())
        .with_observer(Box::new(ConsoleNarrator));

    if args.timed {
        Box::new(TimedMatch::new(game, config.time_limit))
    } else {
        Box::new(game)
    }
}
