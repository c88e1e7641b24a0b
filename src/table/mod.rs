//! In-memory game table.
//!
//! Hosts boards between moves the way a storage-backed service would: each
//! game lives only as its serialized `BoardRecord`, and every move loads a
//! fresh `Board` from it, applies one reveal and stores the result. When a
//! reveal finishes a board the open count goes to the `Leaderboard`.
//!
//! The table takes `&mut self` for every move and has no locking of its
//! own. Hosts sharing one across threads wrap it in their own mutex.

mod game;

pub use game::{CardGame, GameTable, MoveResult};
