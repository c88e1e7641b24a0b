//! The board state machine.
//!
//! A `Board` is a plain value: layout, matched answers, the pending
//! half-pair and the move counter. It does no I/O and holds no locks;
//! callers serialize moves per board and may rebuild it from a stored
//! `BoardRecord` before every move.

use im::OrdMap;
use rand::Rng;
use smallvec::SmallVec;

use super::layout::Layout;
use super::outcome::{IgnoreReason, RevealOutcome};
use super::pairing::PairingState;
use crate::core::{GameConfig, GameError, Position, Result, Symbol};

/// Full game state for one play session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    layout: Layout,
    /// Matched positions plus the pending one, if any.
    answers: OrdMap<Position, Symbol>,
    pairing: PairingState,
    open_count: u32,
}

impl Board {
    /// Generate a shuffled board for `config`.
    ///
    /// Consumes randomness from `rng` and nothing else.
    pub fn build<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        let layout = Layout::generate(config, rng)?;
        log::info!("built board with {} pairs", layout.pair_count());
        Ok(Self::from_layout(layout))
    }

    /// Start a fresh game on a fixed layout.
    #[must_use]
    pub fn from_layout(layout: Layout) -> Self {
        Self {
            layout,
            answers: OrdMap::new(),
            pairing: PairingState::Empty,
            open_count: 0,
        }
    }

    pub(crate) fn from_parts(
        layout: Layout,
        answers: OrdMap<Position, Symbol>,
        pairing: PairingState,
        open_count: u32,
    ) -> Self {
        Self {
            layout,
            answers,
            pairing,
            open_count,
        }
    }

    /// Reveal the card at `position` and report what happened.
    ///
    /// An out-of-range position is an error and leaves the board fully
    /// unchanged. Every other call counts as a move, including reveals that
    /// are ignored because the board is finished.
    pub fn reveal(&mut self, position: Position) -> Result<RevealOutcome> {
        let Some(symbol) = self.layout.get(position).cloned() else {
            log::warn!(
                "rejected reveal of position {} on a {}-card board",
                position,
                self.card_count()
            );
            return Err(GameError::InvalidPosition {
                position,
                card_count: self.card_count(),
            });
        };

        self.open_count = self.open_count.saturating_add(1);
        let outcome = self.apply_reveal(position, symbol);

        log::debug!(
            "reveal {} -> {:?} (open count {})",
            position,
            outcome,
            self.open_count
        );
        if outcome.is_completed() {
            log::info!("board completed after {} reveals", self.open_count);
        }
        Ok(outcome)
    }

    /// Reveal the card at `position`, returning the board for chaining.
    ///
    /// ```
    /// use memory_match::board::{Board, Layout};
    /// use memory_match::core::Position;
    ///
    /// let mut board = Board::from_layout(Layout::from_symbols(["A", "A"]).unwrap());
    /// board
    ///     .submit_reveal(Position(0))?
    ///     .submit_reveal(Position(1))?;
    /// assert!(board.is_complete());
    /// # Ok::<(), memory_match::core::GameError>(())
    /// ```
    pub fn submit_reveal(&mut self, position: Position) -> Result<&mut Self> {
        self.reveal(position)?;
        Ok(self)
    }

    fn apply_reveal(&mut self, position: Position, symbol: Symbol) -> RevealOutcome {
        if self.is_complete() {
            return RevealOutcome::Ignored(IgnoreReason::GameOver);
        }

        match self.pairing {
            PairingState::Pending(pending) if pending == position => {
                RevealOutcome::Ignored(IgnoreReason::AlreadyPending)
            }
            // A matched card never shares the pending card's symbol, so with a
            // card pending it falls through to the mismatch arm below.
            PairingState::Empty if self.answers.contains_key(&position) => {
                RevealOutcome::Ignored(IgnoreReason::AlreadyMatched)
            }
            PairingState::Empty => {
                self.answers.insert(position, symbol);
                self.pairing = PairingState::Pending(position);
                RevealOutcome::Opened
            }
            PairingState::Pending(pending) => {
                self.pairing = PairingState::Empty;
                if self.layout[pending] == symbol {
                    self.answers.insert(position, symbol);
                    if self.is_complete() {
                        RevealOutcome::Completed { partner: pending }
                    } else {
                        RevealOutcome::Matched { partner: pending }
                    }
                } else {
                    self.answers.remove(&pending);
                    RevealOutcome::Mismatched { retracted: pending }
                }
            }
        }
    }

    /// True once every position is matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.layout.card_count()
    }

    /// Number of reveals made so far, accepted or not.
    #[must_use]
    pub fn open_count(&self) -> u32 {
        self.open_count
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.layout.pair_count()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.layout.card_count()
    }

    /// Number of committed pairs.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        let pending = usize::from(!self.pairing.is_empty());
        (self.answers.len() - pending) / 2
    }

    /// The face-up card awaiting its partner, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Position> {
        self.pairing.pending()
    }

    /// The pending half-pair as a sequence of 0 or 1 positions.
    #[must_use]
    pub fn revealed_positions(&self) -> SmallVec<[Position; 2]> {
        self.pending().into_iter().collect()
    }

    /// Face-up cards (matched and pending) in position order.
    pub fn display_by_answer(&self) -> impl Iterator<Item = (Position, &Symbol)> {
        self.answers.iter().map(|(pos, symbol)| (*pos, symbol))
    }

    /// Symbol shown at `position` if that card is face-up.
    #[must_use]
    pub fn face_up_symbol(&self, position: Position) -> Option<&Symbol> {
        self.answers.get(&position)
    }

    /// Hidden symbol at `position`, face-up or not.
    pub fn symbol_at(&self, position: Position) -> Result<&Symbol> {
        self.layout.symbol_at(position)
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn board(symbols: &[&str]) -> Board {
        Board::from_layout(Layout::from_symbols(symbols.iter().copied()).unwrap())
    }

    fn answers(board: &Board) -> Vec<(u32, &str)> {
        board
            .display_by_answer()
            .map(|(pos, symbol)| (pos.raw(), symbol.as_str()))
            .collect()
    }

    #[test]
    fn test_build_starts_empty() {
        let board = Board::build(&GameConfig::new(3), &mut GameRng::new(42)).unwrap();

        assert_eq!(board.card_count(), 6);
        assert_eq!(board.pair_count(), 3);
        assert_eq!(board.open_count(), 0);
        assert_eq!(board.pending(), None);
        assert!(board.revealed_positions().is_empty());
        assert_eq!(board.display_by_answer().count(), 0);
        assert!(!board.is_complete());
    }

    #[test]
    fn test_build_rejects_empty_board() {
        let err = Board::build(&GameConfig::new(0), &mut GameRng::new(42)).unwrap_err();
        assert!(matches!(err, GameError::Configuration { .. }));
    }

    #[test]
    fn test_open_then_match() {
        let mut board = board(&["A", "B", "A", "B"]);

        assert_eq!(board.reveal(Position(0)).unwrap(), RevealOutcome::Opened);
        assert_eq!(board.pending(), Some(Position(0)));
        assert_eq!(answers(&board), vec![(0, "A")]);

        assert_eq!(
            board.reveal(Position(2)).unwrap(),
            RevealOutcome::Matched { partner: Position(0) }
        );
        assert_eq!(board.pending(), None);
        assert_eq!(answers(&board), vec![(0, "A"), (2, "A")]);
        assert_eq!(board.matched_pairs(), 1);
        assert_eq!(board.open_count(), 2);
    }

    #[test]
    fn test_mismatch_retracts_pending() {
        let mut board = board(&["A", "B", "A", "B"]);

        board.reveal(Position(0)).unwrap();
        assert_eq!(
            board.reveal(Position(1)).unwrap(),
            RevealOutcome::Mismatched { retracted: Position(0) }
        );
        assert_eq!(board.pending(), None);
        assert!(answers(&board).is_empty());
        assert_eq!(board.open_count(), 2);
    }

    #[test]
    fn test_same_position_twice_is_ignored() {
        let mut board = board(&["A", "A"]);

        board.reveal(Position(0)).unwrap();
        assert_eq!(
            board.reveal(Position(0)).unwrap(),
            RevealOutcome::Ignored(IgnoreReason::AlreadyPending)
        );
        assert_eq!(board.pending(), Some(Position(0)));
        assert_eq!(answers(&board), vec![(0, "A")]);
        assert!(!board.is_complete());
        assert_eq!(board.open_count(), 2);
    }

    #[test]
    fn test_matched_position_is_ignored() {
        let mut board = board(&["A", "A", "B", "B"]);
        board.reveal(Position(0)).unwrap();
        board.reveal(Position(1)).unwrap();

        assert_eq!(
            board.reveal(Position(1)).unwrap(),
            RevealOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );
        assert_eq!(board.pending(), None);
        assert_eq!(answers(&board), vec![(0, "A"), (1, "A")]);
        assert_eq!(board.open_count(), 3);
    }

    #[test]
    fn test_matched_position_mismatches_pending() {
        let mut board = board(&["A", "A", "B", "B"]);
        board.reveal(Position(0)).unwrap();
        board.reveal(Position(1)).unwrap();
        board.reveal(Position(2)).unwrap();

        assert_eq!(
            board.reveal(Position(0)).unwrap(),
            RevealOutcome::Mismatched { retracted: Position(2) }
        );
        assert_eq!(board.pending(), None);
        assert_eq!(answers(&board), vec![(0, "A"), (1, "A")]);
        assert_eq!(board.matched_pairs(), 1);
        assert_eq!(board.open_count(), 4);
    }

    #[test]
    fn test_completion_and_game_over() {
        let mut board = board(&["A", "A"]);

        board.reveal(Position(1)).unwrap();
        assert_eq!(
            board.reveal(Position(0)).unwrap(),
            RevealOutcome::Completed { partner: Position(1) }
        );
        assert!(board.is_complete());

        let before = answers(&board).len();
        assert_eq!(
            board.reveal(Position(0)).unwrap(),
            RevealOutcome::Ignored(IgnoreReason::GameOver)
        );
        assert_eq!(answers(&board).len(), before);
        assert!(board.is_complete());
        assert_eq!(board.open_count(), 3);
    }

    #[test]
    fn test_out_of_range_leaves_board_unchanged() {
        let mut board = board(&["A", "A", "B", "B"]);
        board.reveal(Position(2)).unwrap();
        let before = board.clone();

        let err = board.reveal(Position(99)).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidPosition { card_count: 4, .. }
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn test_submit_reveal_chains() {
        let mut board = board(&["A", "B", "B", "A"]);
        board
            .submit_reveal(Position(0))
            .unwrap()
            .submit_reveal(Position(3))
            .unwrap()
            .submit_reveal(Position(1))
            .unwrap()
            .submit_reveal(Position(2))
            .unwrap();
        assert!(board.is_complete());
        assert_eq!(board.open_count(), 4);
        assert_eq!(board.matched_pairs(), 2);
    }

    #[test]
    fn test_face_up_symbol() {
        let mut board = board(&["A", "B", "A", "B"]);
        board.reveal(Position(1)).unwrap();
        assert_eq!(board.face_up_symbol(Position(1)), Some(&Symbol::from("B")));
        assert_eq!(board.face_up_symbol(Position(0)), None);
        assert_eq!(board.symbol_at(Position(0)).unwrap(), &Symbol::from("A"));
    }
}
