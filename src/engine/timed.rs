//! Time-bound matches.
//!
//! `TimedMatch` wraps another `TurnBasedMatch` and checks the clock once per
//! turn boundary. Once the limit has passed, it plays no further turns: the
//! participant with the highest score (earliest seat on ties) becomes the
//! winner, and that result is kept as match state so `check_winner` reports
//! it like any other win.
//!
//! The check is cooperative. A decision already being awaited is not
//! interrupted.

use std::time::Duration;

use tracing::info;

use crate::core::{GameError, Participant};

use super::clock::{Clock, Deadline, SystemClock};
use super::event::{GameEvent, WinReason, Winner};
use super::game::{leader, TurnBasedMatch};
use super::turn::TurnResult;

/// A match with a wall-clock limit.
pub struct TimedMatch<G, C = SystemClock> {
    inner: G,
    clock: C,
    deadline: Deadline,
    timeout_winner: Option<Winner>,
}

impl<G: TurnBasedMatch> TimedMatch<G> {
    /// Start the clock now, using system time.
    pub fn new(inner: G, limit: Duration) -> Self {
        Self::with_clock(inner, SystemClock, limit)
    }
}

impl<G: TurnBasedMatch, C: Clock> TimedMatch<G, C> {
    /// Start the clock now, using `clock`.
    pub fn with_clock(inner: G, clock: C, limit: Duration) -> Self {
        let deadline = Deadline::new(clock.now(), limit);
        Self {
            inner,
            clock,
            deadline,
            timeout_winner: None,
        }
    }

    /// The wrapped match.
    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn deadline(&self) -> &Deadline {
        &self.deadline
    }

    /// True once the limit has ended the match.
    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.timeout_winner.is_some()
    }

    fn expire(&mut self) {
        let elapsed = self.deadline.elapsed(self.clock.now());
        let best = leader(self.inner.participants());
        let winner = Winner {
            player: best.id(),
            name: best.name().to_string(),
            score: best.score(),
            reason: WinReason::TimeExpired,
        };

        info!(
            elapsed_ms = elapsed.as_millis() as u64,
            player = %winner.player,
            score = winner.score,
            "Time limit reached"
        );
        self.inner.emit(GameEvent::TimeExpired { elapsed });
        self.timeout_winner = Some(winner);
    }
}

impl<G: TurnBasedMatch, C: Clock> TurnBasedMatch for TimedMatch<G, C> {
    fn play_turn(&mut self) -> Result<Option<TurnResult>, GameError> {
        if self.timeout_winner.is_some() {
            return Ok(None);
        }
        if self.deadline.expired(self.clock.now()) {
            self.expire();
            return Ok(None);
        }
        self.inner.play_turn()
    }

    fn check_winner(&self) -> Option<Winner> {
        self.timeout_winner
            .clone()
            .or_else(|| self.inner.check_winner())
    }

    fn participants(&self) -> &[Participant] {
        self.inner.participants()
    }

    fn active_index(&self) -> usize {
        self.inner.active_index()
    }

    fn turn_number(&self) -> u32 {
        self.inner.turn_number()
    }

    fn emit(&mut self, event: GameEvent) {
        self.inner.emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, ScriptedDice};
    use crate::engine::clock::ManualClock;
    use crate::engine::event::EventLog;
    use crate::engine::game::PigMatch;
    use crate::policy::HoldAtThreshold;

    fn timed(dice: ScriptedDice, clock: &ManualClock) -> TimedMatch<PigMatch<ScriptedDice>, ManualClock> {
        let players = PlayerId::all(2)
            .map(|id| Participant::computer(id, format!("Player {}", id.index() + 1), HoldAtThreshold::default()))
            .collect();
        TimedMatch::with_clock(PigMatch::new(players, dice), clock.clone(), Duration::from_secs(60))
    }

    #[test]
    fn test_delegates_before_deadline() {
        let clock = ManualClock::new();
        let mut game = timed(ScriptedDice::new([5, 5, 5, 5, 5]), &clock);

        clock.advance(Duration::from_secs(59));
        let result = game.play_turn().unwrap().unwrap();

        assert_eq!(result.earned_points, 25);
        assert!(!game.timed_out());
        assert_eq!(game.check_winner(), None);
    }

    #[test]
    fn test_timeout_picks_leader_without_rolling() {
        let clock = ManualClock::new();
        // P1 banks 25, P2 busts
        let mut game = timed(ScriptedDice::new([5, 5, 5, 5, 5, 1]), &clock);
        game.play_turn().unwrap();
        game.play_turn().unwrap();
        let turns = game.turn_number();

        clock.advance(Duration::from_secs(61));
        assert_eq!(game.play_turn().unwrap(), None);

        let winner = game.check_winner().unwrap();
        assert_eq!(winner.player, PlayerId::new(0));
        assert_eq!(winner.score, 25);
        assert_eq!(winner.reason, WinReason::TimeExpired);
        assert_eq!(game.turn_number(), turns);
        assert_eq!(game.inner().rng().rolls_made(), 6);
    }

    #[test]
    fn test_timeout_tie_goes_to_first_seat() {
        let clock = ManualClock::new();
        let mut game = timed(ScriptedDice::new([2]), &clock);

        clock.advance(Duration::from_secs(120));
        game.play_turn().unwrap();

        assert_eq!(game.check_winner().unwrap().player, PlayerId::new(0));
    }

    #[test]
    fn test_no_turns_after_timeout() {
        let clock = ManualClock::new();
        let mut game = timed(ScriptedDice::new([3]), &clock);

        clock.advance(Duration::from_secs(61));
        game.play_turn().unwrap();
        let first = game.check_winner();

        assert_eq!(game.play_turn().unwrap(), None);
        assert_eq!(game.check_winner(), first);
        assert_eq!(game.inner().rng().rolls_made(), 0);
    }

    #[test]
    fn test_timeout_emits_event_once() {
        let clock = ManualClock::new();
        let log = EventLog::new();
        let players = PlayerId::all(2)
            .map(|id| Participant::computer(id, format!("Player {}", id.index() + 1), HoldAtThreshold::default()))
            .collect();
        let inner = PigMatch::new(players, ScriptedDice::new([3])).with_observer(Box::new(log.clone()));
        let mut game = TimedMatch::with_clock(inner, clock.clone(), Duration::from_secs(60));

        clock.advance(Duration::from_secs(90));
        game.play_turn().unwrap();
        game.play_turn().unwrap();

        assert_eq!(
            log.events(),
            vec![GameEvent::TimeExpired {
                elapsed: Duration::from_secs(90)
            }]
        );
    }

    #[test]
    fn test_threshold_win_passes_through() {
        let clock = ManualClock::new();
        let players: Vec<_> = PlayerId::all(2)
            .map(|id| Participant::computer(id, format!("Player {}", id.index() + 1), HoldAtThreshold::new(25, 30)))
            .collect();
        let inner = PigMatch::new(players, ScriptedDice::new([6]))
            .with_config(crate::core::GameConfig::new().with_win_threshold(30));
        let mut game = TimedMatch::with_clock(inner, clock, Duration::from_secs(60));

        game.play_turn().unwrap();

        let winner = game.check_winner().unwrap();
        assert_eq!(winner.player, PlayerId::new(0));
        assert_eq!(winner.score, 30);
        assert_eq!(winner.reason, WinReason::Threshold);
        assert!(!game.timed_out());
    }
}
