//! Error types.
//!
//! Only two things can go wrong: a bad player selection before the match
//! starts, and losing the decision channel of an interactive player.
//! Unrecognized interactive input is not an error; it is asked for again.

use thiserror::Error;

use super::player::PlayerId;

/// Fatal configuration errors, raised before a match starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown player type '{0}' (expected 'human' or 'computer')")]
    UnknownPlayerKind(String),
}

/// Errors raised while a match is being played.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("input closed while waiting for a decision from {0}")]
    InputClosed(PlayerId),

    #[error("failed to read decision: {0}")]
    Io(#[from] std::io::Error),
}
