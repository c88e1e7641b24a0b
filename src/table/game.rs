//! Game storage and the load, reveal, store cycle.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, GameInfo, RevealOutcome};
use crate::core::{GameConfig, GameError, GameId, OwnerId, Position, Result};
use crate::scoring::{Leaderboard, ScoreUpdate};

/// Read model of a stored game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardGame {
    pub id: GameId,
    pub owner: OwnerId,
    pub open_count: u32,
    pub info: GameInfo,
}

impl CardGame {
    fn from_board(id: GameId, owner: OwnerId, board: &Board) -> Self {
        Self {
            id,
            owner,
            open_count: board.open_count(),
            info: board.info(),
        }
    }
}

/// Result of `GameTable::open_card`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub game: CardGame,
    pub outcome: RevealOutcome,
    /// Set when this move finished the board.
    pub score: Option<ScoreUpdate>,
}

#[derive(Clone, Debug)]
struct StoredGame {
    owner: OwnerId,
    /// JSON-encoded `BoardRecord`.
    record: String,
}

/// Games keyed by id, plus the best-score leaderboard.
#[derive(Clone, Debug)]
pub struct GameTable {
    config: GameConfig,
    games: BTreeMap<GameId, StoredGame>,
    next_id: u64,
    leaderboard: Leaderboard,
}

impl GameTable {
    /// Create an empty table dealing boards of `config`'s size.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            games: BTreeMap::new(),
            next_id: 1,
            leaderboard: Leaderboard::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Deal a new board for `owner`. Games already in progress are kept.
    pub fn create_game<R: Rng + ?Sized>(&mut self, owner: OwnerId, rng: &mut R) -> Result<CardGame> {
        let board = Board::build(&self.config, rng)?;
        let id = GameId::new(self.next_id);
        self.next_id += 1;

        self.store(id, owner, &board)?;
        log::info!("created game {id} for {owner}");
        Ok(CardGame::from_board(id, owner, &board))
    }

    /// Apply one reveal to game `id`.
    pub fn open_card(&mut self, id: GameId, position: Position) -> Result<MoveResult> {
        let (owner, mut board) = self.load(id)?;

        let outcome = board.reveal(position)?;
        self.store(id, owner, &board)?;

        let score = outcome
            .is_completed()
            .then(|| self.leaderboard.record(owner, board.open_count()));

        Ok(MoveResult {
            game: CardGame::from_board(id, owner, &board),
            outcome,
            score,
        })
    }

    pub fn read_game(&self, id: GameId) -> Result<CardGame> {
        let (owner, board) = self.load(id)?;
        Ok(CardGame::from_board(id, owner, &board))
    }

    /// Full board of game `id`, hidden layout included.
    pub fn load_board(&self, id: GameId) -> Result<Board> {
        self.load(id).map(|(_, board)| board)
    }

    /// Games of `owner` in creation order.
    pub fn games_by_owner(&self, owner: OwnerId, skip: usize, limit: usize) -> Result<Vec<CardGame>> {
        self.games
            .iter()
            .filter(|(_, stored)| stored.owner == owner)
            .skip(skip)
            .take(limit)
            .map(|(&id, stored)| {
                let board = Board::from_json(&stored.record)?;
                Ok(CardGame::from_board(id, owner, &board))
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    fn load(&self, id: GameId) -> Result<(OwnerId, Board)> {
        let stored = self.games.get(&id).ok_or(GameError::GameNotFound(id))?;
        Ok((stored.owner, Board::from_json(&stored.record)?))
    }

    fn store(&mut self, id: GameId, owner: OwnerId, board: &Board) -> Result<()> {
        let record = board.to_json()?;
        self.games.insert(id, StoredGame { owner, record });
        Ok(())
    }
}
