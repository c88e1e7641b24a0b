//! Per-owner best scores and ranked listing.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::OwnerId;

/// Fewest reveals an owner has needed to finish a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub owner: OwnerId,
    pub min_open_count: u32,
}

/// Effect of reporting a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScoreUpdate {
    /// First finished game for this owner.
    First,
    /// Beat the previous best.
    Improved { previous: u32 },
    /// Did not beat the standing best.
    Unchanged { best: u32 },
}

impl ScoreUpdate {
    pub const fn is_new_best(self) -> bool {
        matches!(self, Self::First | Self::Improved { .. })
    }
}

/// Listing parameters for `Leaderboard::query`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreQuery {
    pub owner: Option<OwnerId>,
    pub skip: usize,
    pub limit: usize,
}

impl Default for ScoreQuery {
    fn default() -> Self {
        Self {
            owner: None,
            skip: 0,
            limit: 1,
        }
    }
}

impl ScoreQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn for_owner(mut self, owner: OwnerId) -> Self {
        self.owner = Some(owner);
        self
    }

    #[must_use]
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Best score per owner. Lower open counts rank higher.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    scores: FxHashMap<OwnerId, BestScore>,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a finished game's open count for `owner`.
    pub fn record(&mut self, owner: OwnerId, open_count: u32) -> ScoreUpdate {
        let update = match self.scores.entry(owner) {
            Entry::Vacant(slot) => {
                slot.insert(BestScore {
                    owner,
                    min_open_count: open_count,
                });
                ScoreUpdate::First
            }
            Entry::Occupied(mut slot) => {
                let best = slot.get_mut();
                if open_count < best.min_open_count {
                    let previous = best.min_open_count;
                    best.min_open_count = open_count;
                    ScoreUpdate::Improved { previous }
                } else {
                    ScoreUpdate::Unchanged {
                        best: best.min_open_count,
                    }
                }
            }
        };

        if update.is_new_best() {
            log::info!("{owner} set a new best of {open_count} reveals");
        }
        update
    }

    #[must_use]
    pub fn best(&self, owner: OwnerId) -> Option<BestScore> {
        self.scores.get(&owner).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Best scores in ascending open count order (ties by owner).
    #[must_use]
    pub fn query(&self, query: ScoreQuery) -> Vec<BestScore> {
        let mut scores: Vec<BestScore> = self
            .scores
            .values()
            .filter(|score| query.owner.map_or(true, |owner| score.owner == owner))
            .copied()
            .collect();
        scores.sort_by_key(|score| (score.min_open_count, score.owner));
        scores
            .into_iter()
            .skip(query.skip)
            .take(query.limit)
            .collect()
    }
}
