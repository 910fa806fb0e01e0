//! Interactive participants driven by canned input.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use pig_dice::core::{GameError, Participant, PlayerId, ScriptedDice};
use pig_dice::engine::{run_match, PigMatch, TurnBasedMatch, WinReason};
use pig_dice::policy::{DecisionInput, HoldAtThreshold, ScriptedInput};

/// Input whose answers and prompts can be inspected after the match owns it.
#[derive(Clone, Default)]
struct SharedInput {
    inner: Rc<RefCell<ScriptedInput>>,
}

impl SharedInput {
    fn new(answers: &[&str]) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ScriptedInput::new(answers.iter().copied()))),
        }
    }

    fn prompt_count(&self) -> usize {
        self.inner.borrow().prompts().len()
    }
}

impl DecisionInput for SharedInput {
    fn request(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.inner.borrow_mut().request(prompt)
    }
}

#[test]
fn test_human_against_computer() {
    // Human rolls 6, 6 and holds 12; computer busts on the 1.
    let input = SharedInput::new(&["r", "r", "h"]);
    let players = vec![
        Participant::interactive(PlayerId::new(0), "Player 1", input.clone()),
        Participant::computer(PlayerId::new(1), "Player 2", HoldAtThreshold::default()),
    ];
    let mut game = PigMatch::new(players, ScriptedDice::new(vec![6, 6, 1]));

    game.play_turn().unwrap();
    game.play_turn().unwrap();

    assert_eq!(game.participants()[0].score(), 12);
    assert_eq!(game.participants()[1].score(), 0);
    assert_eq!(input.prompt_count(), 3);
}

#[test]
fn test_unrecognized_input_is_asked_again() {
    let input = SharedInput::new(&["", "roll", "  R ", "yes", "H"]);
    let players = vec![
        Participant::interactive(PlayerId::new(0), "Player 1", input.clone()),
        Participant::computer(PlayerId::new(1), "Player 2", HoldAtThreshold::default()),
    ];
    let mut game = PigMatch::new(players, ScriptedDice::new(vec![5]));

    let result = game.play_turn().unwrap().unwrap();

    assert_eq!(result.earned_points, 5);
    assert_eq!(result.rolls, vec![5]);
    assert_eq!(input.prompt_count(), 5);
}

#[test]
fn test_closed_input_stops_match_without_scoring() {
    let input = SharedInput::new(&["r"]);
    let players = vec![
        Participant::interactive(PlayerId::new(0), "Player 1", input),
        Participant::computer(PlayerId::new(1), "Player 2", HoldAtThreshold::default()),
    ];
    let mut game = PigMatch::new(players, ScriptedDice::new(vec![4]));

    let err = run_match(&mut game).unwrap_err();

    assert!(matches!(err, GameError::InputClosed(p) if p == PlayerId::new(0)));
    assert_eq!(game.participants()[0].score(), 0);
    assert_eq!(game.active_index(), 0);
    assert_eq!(game.turn_number(), 0);
}

#[test]
fn test_two_humans_play_to_a_win() {
    // Each turn: roll, roll, hold. Dice give 6+4 = 10 per turn.
    let answers: Vec<&str> = std::iter::repeat(["r", "r", "h"]).take(20).flatten().collect();
    let players = vec![
        Participant::interactive(PlayerId::new(0), "Player 1", ScriptedInput::new(answers.clone())),
        Participant::interactive(PlayerId::new(1), "Player 2", ScriptedInput::new(answers)),
    ];
    let mut game = PigMatch::new(players, ScriptedDice::new(vec![6, 4]));

    let winner = run_match(&mut game).unwrap();

    assert_eq!(winner.player, PlayerId::new(0));
    assert_eq!(winner.score, 100);
    assert_eq!(winner.reason, WinReason::Threshold);
    assert_eq!(game.participants()[1].score(), 90);
    assert_eq!(game.turn_number(), 19);
}
