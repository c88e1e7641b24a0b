//! Best-score tracking.
//!
//! When a reveal finishes a board, the caller reports the board's open
//! count here. Each owner keeps the lowest count seen; "fewest reveals
//! wins" is the only ranking.

mod leaderboard;

pub use leaderboard::{BestScore, Leaderboard, ScoreQuery, ScoreUpdate};
