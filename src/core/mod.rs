//! Core types: identifiers, configuration, errors, RNG.
//!
//! Everything the board engine and the collaborators around it share.

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;

pub use config::{GameConfig, DEFAULT_PAIR_COUNT, PAIR_COUNT_ENV};
pub use error::{GameError, Result};
pub use ids::{GameId, OwnerId, Position, Symbol};
pub use rng::GameRng;
