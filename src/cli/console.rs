//! Console input and narration.

use std::io::{self, BufRead, Write};

use crate::engine::{GameEvent, GameObserver, WinReason};
use crate::policy::DecisionInput;

/// Reads decisions from standard input, prompting on standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdinInput;

impl DecisionInput for StdinInput {
    fn request(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Human-readable line for an event.
#[must_use]
pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::Rolled {
            name,
            value,
            turn_total,
            grand_total,
            ..
        } => format!("{name}, you rolled a {value}. Turn score: {turn_total}, Total score: {grand_total}"),
        GameEvent::Bust { name, .. } => {
            format!("Sorry, {name}, you rolled a 1. No points for this turn.")
        }
        GameEvent::Held { name, banked, total, .. } => {
            format!("{name} holds with {banked} points. Total score: {total}")
        }
        GameEvent::TimeExpired { .. } => "Time's up!".to_string(),
        GameEvent::Winner(winner) => match winner.reason {
            WinReason::Threshold => format!(
                "Congratulations, {}! You won with a score of {}.",
                winner.name, winner.score
            ),
            WinReason::TimeExpired => {
                format!("The winner is {} with a score of {}.", winner.name, winner.score)
            }
        },
    }
}

/// Prints every event to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNarrator;

impl GameObserver for ConsoleNarrator {
    fn on_event(&mut self, event: &GameEvent) {
        println!("{}", describe(event));
    }
}
