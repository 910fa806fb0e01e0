//! Match driver.

use tracing::info;

use crate::core::GameError;

use super::event::{GameEvent, Winner};
use super::game::TurnBasedMatch;

/// Play turns until the match reports a winner, then announce it.
///
/// Works the same for plain and timed matches: a timed match that runs out
/// of time reports its winner through `check_winner` like any other.
pub fn run_match<G>(game: &mut G) -> Result<Winner, GameError>
where
    G: TurnBasedMatch + ?Sized,
{
    loop {
        game.play_turn()?;
        if let Some(winner) = game.check_winner() {
            info!(
                player = %winner.player,
                score = winner.score,
                reason = ?winner.reason,
                turns = game.turn_number(),
                "Match over"
            );
            game.emit(GameEvent::Winner(winner.clone()));
            return Ok(winner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DiceRng, Participant, PlayerId};
    use crate::engine::event::{EventLog, WinReason};
    use crate::engine::game::PigMatch;
    use crate::policy::HoldAtThreshold;

    #[test]
    fn test_runs_computer_match_to_completion() {
        let players = PlayerId::all(2)
            .map(|id| Participant::computer(id, format!("Player {}", id.index() + 1), HoldAtThreshold::default()))
            .collect();
        let log = EventLog::new();
        let mut game = PigMatch::new(players, DiceRng::new(42)).with_observer(Box::new(log.clone()));

        let winner = run_match(&mut game).unwrap();

        assert_eq!(winner.reason, WinReason::Threshold);
        assert!(winner.score >= 100);
        assert_eq!(game.check_winner(), Some(winner.clone()));
        assert_eq!(log.events().last(), Some(&GameEvent::Winner(winner)));
    }

    #[test]
    fn test_same_seed_same_match() {
        let play = |seed| {
            let players = PlayerId::all(2)
                .map(|id| Participant::computer(id, format!("Player {}", id.index() + 1), HoldAtThreshold::default()))
                .collect();
            let mut game = PigMatch::new(players, DiceRng::new(seed));
            let winner = run_match(&mut game).unwrap();
            (winner, game.snapshot())
        };

        assert_eq!(play(7), play(7));
    }
}
