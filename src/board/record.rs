//! Stored shape of a board.
//!
//! `BoardRecord` is what crosses the persistence boundary. Field names are
//! part of the stored schema and must not change:
//!
//! | field | meaning |
//! |---|---|
//! | `display_by_position` | hidden layout, one label per position |
//! | `answer_as_position_in_sequence` | pending half-pair, 0 or 1 positions |
//! | `display_by_answer` | face-up position -> label |
//! | `open_count` | reveals made so far |
//!
//! Loading a record re-checks every board invariant, so a board rebuilt
//! from storage behaves exactly like the one that was saved.

use std::collections::BTreeMap;

use im::OrdMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::engine::Board;
use super::layout::Layout;
use super::pairing::PairingState;
use crate::core::{GameError, Position, Result, Symbol};

/// Serializable board state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRecord {
    pub display_by_position: Vec<Symbol>,
    pub answer_as_position_in_sequence: SmallVec<[Position; 2]>,
    pub display_by_answer: BTreeMap<Position, Symbol>,
    #[serde(default)]
    pub open_count: u32,
}

impl BoardRecord {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Board {
    /// Snapshot the board into its stored shape.
    #[must_use]
    pub fn to_record(&self) -> BoardRecord {
        BoardRecord {
            display_by_position: self.layout().symbols().cloned().collect(),
            answer_as_position_in_sequence: self.revealed_positions(),
            display_by_answer: self
                .display_by_answer()
                .map(|(pos, symbol)| (pos, symbol.clone()))
                .collect(),
            open_count: self.open_count(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        self.to_record().to_json()
    }

    /// Rebuild a board from JSON, validating it.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::try_from(BoardRecord::from_json(json)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_record().to_bytes()
    }

    /// Rebuild a board from the binary encoding, validating it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::try_from(BoardRecord::from_bytes(bytes)?)
    }
}

impl TryFrom<BoardRecord> for Board {
    type Error = GameError;

    fn try_from(record: BoardRecord) -> Result<Self> {
        let BoardRecord {
            display_by_position,
            answer_as_position_in_sequence,
            display_by_answer,
            open_count,
        } = record;

        let layout = Layout::from_stored(display_by_position)?;

        if answer_as_position_in_sequence.len() > 1 {
            return Err(corrupt(format!(
                "{} pending positions, at most one allowed",
                answer_as_position_in_sequence.len()
            )));
        }
        let pending = answer_as_position_in_sequence.first().copied();

        for (&position, symbol) in &display_by_answer {
            match layout.get(position) {
                None => {
                    return Err(corrupt(format!(
                        "answer position {position} is outside a board of {} cards",
                        layout.card_count()
                    )))
                }
                Some(expected) if expected != symbol => {
                    return Err(corrupt(format!(
                        "answer at position {position} shows '{symbol}' but the card is '{expected}'"
                    )))
                }
                Some(_) => {}
            }
        }

        if let Some(pending) = pending {
            if !display_by_answer.contains_key(&pending) {
                return Err(corrupt(format!(
                    "pending position {pending} is not face-up"
                )));
            }
        }

        for &position in display_by_answer.keys() {
            if Some(position) == pending {
                continue;
            }
            let partner = layout.partner_of(position);
            let paired = partner
                .is_some_and(|p| Some(p) != pending && display_by_answer.contains_key(&p));
            if !paired {
                return Err(corrupt(format!(
                    "matched position {position} has no matched partner"
                )));
            }
        }

        let answers: OrdMap<Position, Symbol> = display_by_answer.into_iter().collect();
        Ok(Board::from_parts(
            layout,
            answers,
            PairingState::from_pending(pending),
            open_count,
        ))
    }
}

fn corrupt(reason: String) -> GameError {
    log::warn!("rejected stored board: {reason}");
    GameError::corrupt(reason)
}
