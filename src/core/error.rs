//! Error type shared by the whole crate.
//!
//! Every variant is a local, non-retriable input failure: a bad board size,
//! a move outside the board, or a stored record that no longer satisfies
//! the board invariants.

use thiserror::Error;

use super::ids::{GameId, Position};

/// Errors surfaced to the caller of the engine.
#[derive(Error, Debug)]
pub enum GameError {
    /// Invalid board size at construction.
    #[error("invalid board configuration ({pair_count} pairs): {reason}")]
    Configuration { pair_count: usize, reason: String },

    /// Move outside `[0, card_count)`.
    #[error("position {position} is outside a board of {card_count} cards")]
    InvalidPosition { position: Position, card_count: usize },

    /// A reloaded record violates a board invariant.
    #[error("corrupt board state: {0}")]
    CorruptState(String),

    #[error("game {0} not found")]
    GameNotFound(GameId),

    #[error("json codec error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary codec error: {0}")]
    Binary(#[from] bincode::Error),
}

impl GameError {
    pub(crate) fn configuration(pair_count: usize, reason: impl Into<String>) -> Self {
        Self::Configuration {
            pair_count,
            reason: reason.into(),
        }
    }

    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        Self::CorruptState(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_position_message() {
        let err = GameError::InvalidPosition {
            position: Position::new(99),
            card_count: 4,
        };
        assert_eq!(err.to_string(), "position 99 is outside a board of 4 cards");
    }

    #[test]
    fn test_configuration_message() {
        let err = GameError::configuration(0, "at least one pair is required");
        assert_eq!(
            err.to_string(),
            "invalid board configuration (0 pairs): at least one pair is required"
        );
    }

    #[test]
    fn test_corrupt_message() {
        let err = GameError::corrupt("pending position 3 is not revealed");
        assert_eq!(err.to_string(), "corrupt board state: pending position 3 is not revealed");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: GameError = parse.unwrap_err().into();
        assert!(matches!(err, GameError::Json(_)));
    }
}
