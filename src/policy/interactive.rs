//! Interactive participants.
//!
//! The decision comes from outside the engine. `Interactive` asks its
//! `DecisionInput` until it gets a recognizable answer; unrecognized text is
//! re-requested and never read as roll or hold.

use std::collections::VecDeque;
use std::io;

use tracing::warn;

use crate::core::GameError;

use super::decision::{Controller, Decision, TurnView};

/// External source of typed answers.
pub trait DecisionInput {
    /// Show `prompt` and return the raw answer, or `None` once the input is
    /// exhausted.
    fn request(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Controller that defers every decision to a `DecisionInput`.
#[derive(Debug)]
pub struct Interactive<I> {
    input: I,
}

impl<I: DecisionInput> Interactive<I> {
    /// Wrap an input source.
    pub fn new(input: I) -> Self {
        Self { input }
    }

    /// Access the wrapped input.
    pub fn input(&self) -> &I {
        &self.input
    }
}

/// Prompt shown to an interactive player.
#[must_use]
pub fn prompt_for(name: &str) -> String {
    format!("{name}, do you want to roll or hold? (r/h): ")
}

impl<I: DecisionInput> Controller for Interactive<I> {
    fn decide(&mut self, view: &TurnView<'_>) -> Result<Decision, GameError> {
        let prompt = prompt_for(view.name);
        loop {
            let Some(answer) = self.input.request(&prompt)? else {
                return Err(GameError::InputClosed(view.player));
            };
            match Decision::parse(&answer) {
                Some(decision) => return Ok(decision),
                None => warn!(player = %view.player, answer = %answer.trim(), "Unrecognized decision, asking again"),
            }
        }
    }

    fn label(&self) -> &'static str {
        "human"
    }
}

/// Canned answers, replayed in order. Records every prompt it was shown.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Create input that will answer with `answers` in order.
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl DecisionInput for ScriptedInput {
    fn request(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
