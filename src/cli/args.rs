//! Command-line arguments.

use clap::Parser;

use crate::core::PlayerKind;

/// Play Pig: roll to build a turn total, hold to bank it, a 1 loses it.
/// First to 100 wins.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "pig", version, about)]
pub struct Args {
    /// Who controls player 1: human or computer.
    #[arg(long, default_value = "human")]
    pub player1: PlayerKind,

    /// Who controls player 2: human or computer.
    #[arg(long, default_value = "human")]
    pub player2: PlayerKind,

    /// Stop after 60 seconds; the highest score wins.
    #[arg(long)]
    pub timed: bool,
}

impl Args {
    /// Seat kinds in turn order.
    #[must_use]
    pub fn seats(&self) -> [PlayerKind; 2] {
        [self.player1, self.player2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_two_humans() {
        let args = Args::try_parse_from(["pig"]).unwrap();
        assert_eq!(args.seats(), [PlayerKind::Human, PlayerKind::Human]);
        assert!(!args.timed);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from(["pig", "--player1", "computer", "--player2", "Human", "--timed"]).unwrap();
        assert_eq!(args.seats(), [PlayerKind::Computer, PlayerKind::Human]);
        assert!(args.timed);
    }

    #[test]
    fn test_unknown_player_type_is_rejected() {
        let err = Args::try_parse_from(["pig", "--player2", "robot"]).unwrap_err();
        assert!(err.to_string().contains("robot"));
    }

    #[test]
    fn test_timed_takes_no_value() {
        assert!(Args::try_parse_from(["pig", "--timed", "yes"]).is_err());
    }

    #[test]
    fn test_no_other_flags() {
        assert!(Args::try_parse_from(["pig", "--seed", "4"]).is_err());
    }
}
