//! Read view of a board for callers that must not see the layout.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::engine::Board;
use crate::core::{Position, Symbol};

/// Caller-facing read view of a board.
///
/// Leaves out the hidden layout: only face-up cards are visible.
/// `is_game_end` is derived from the board, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub answer_as_position_in_sequence: Vec<Position>,
    pub display_by_answer: BTreeMap<Position, Symbol>,
    pub is_game_end: bool,
}

impl Board {
    #[must_use]
    pub fn info(&self) -> GameInfo {
        GameInfo {
            answer_as_position_in_sequence: self.revealed_positions().into_vec(),
            display_by_answer: self
                .display_by_answer()
                .map(|(pos, symbol)| (pos, symbol.clone()))
                .collect(),
            is_game_end: self.is_complete(),
        }
    }
}
