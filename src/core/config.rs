//! Board configuration.
//!
//! The board size is passed explicitly into board generation rather than
//! read from global settings, so boards of different sizes can coexist.
//! Hosts that do want an ambient default can use `GameConfig::from_env`.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Environment variable read by `GameConfig::from_env`.
pub const PAIR_COUNT_ENV: &str = "MEMORY_MATCH_PAIR_COUNT";

/// Pair count used when nothing else is configured (12 cards).
pub const DEFAULT_PAIR_COUNT: usize = 6;

/// Board configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of distinct symbols. The board holds twice as many cards.
    pub pair_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
        }
    }
}

impl GameConfig {
    /// Create a configuration for `pair_count` pairs.
    ///
    /// Not validated until `validate` (or board generation) runs.
    #[must_use]
    pub const fn new(pair_count: usize) -> Self {
        Self { pair_count }
    }

    /// Set the pair count.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Total number of cards on the board.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Check the board has at least one pair and that every position fits
    /// a `Position`.
    pub fn validate(&self) -> Result<()> {
        if self.pair_count == 0 {
            return Err(GameError::configuration(
                self.pair_count,
                "at least one pair is required",
            ));
        }
        let fits = self
            .pair_count
            .checked_mul(2)
            .is_some_and(|cards| cards <= u32::MAX as usize);
        if !fits {
            return Err(GameError::configuration(
                self.pair_count,
                "card count does not fit a board position",
            ));
        }
        Ok(())
    }

    /// Read the pair count from `MEMORY_MATCH_PAIR_COUNT`.
    ///
    /// A missing variable yields the default configuration. A value that is
    /// not a positive integer is a configuration error.
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var(PAIR_COUNT_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Result<Self> {
        let Some(raw) = value else {
            return Ok(Self::default());
        };
        let pair_count = raw.trim().parse::<usize>().map_err(|e| {
            GameError::configuration(0, format!("{PAIR_COUNT_ENV}={raw:?} is not a count: {e}"))
        })?;
        let config = Self::new(pair_count);
        config.validate()?;
        Ok(config)
    }
}
