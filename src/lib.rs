//! # memory-match
//!
//! Game state engine for a memory (concentration) card-matching game.
//!
//! A board holds `2N` face-down cards showing `N` symbols, each twice.
//! Players reveal one card per call; two consecutive reveals with the same
//! symbol stay face-up, a mismatch flips the first card back. The game is
//! over once every card is face-up, and the number of reveals it took is
//! the score (lower is better).
//!
//! ## Design Principles
//!
//! 1. **Plain values**: A `Board` is a value with no I/O, no locks and no
//!    hidden identity. It round-trips through `BoardRecord` between moves.
//!
//! 2. **Explicit configuration**: Board size and randomness are passed into
//!    `Board::build`; nothing is read from global state.
//!
//! 3. **Structural invariants**: The pending half-pair is a tagged variant,
//!    so "at most one card awaiting a partner" cannot be violated.
//!
//! ## Modules
//!
//! - `core`: Positions, symbols, ids, configuration, errors, RNG
//! - `board`: Layout generation, reveal state machine, stored record, read view
//! - `scoring`: Best score per owner
//! - `table`: In-memory host that stores boards between moves
//!
//! ## Example
//!
//! ```
//! use memory_match::{Board, GameConfig, GameRng, Position};
//!
//! let mut rng = GameRng::new(42);
//! let mut board = Board::build(&GameConfig::new(2), &mut rng)?;
//!
//! let partner = board.layout().partner_of(Position(0)).unwrap();
//! board.submit_reveal(Position(0))?.submit_reveal(partner)?;
//!
//! assert_eq!(board.matched_pairs(), 1);
//! assert_eq!(board.open_count(), 2);
//! # Ok::<(), memory_match::GameError>(())
//! ```

pub mod board;
pub mod core;
pub mod scoring;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameId, GameRng, OwnerId, Position, Result, Symbol,
};

pub use crate::board::{
    Board, BoardRecord, GameInfo, IgnoreReason, Layout, RevealOutcome,
};

pub use crate::scoring::{BestScore, Leaderboard, ScoreQuery, ScoreUpdate};

pub use crate::table::{CardGame, GameTable, MoveResult};
