//! What a single reveal did to the board.

use crate::core::Position;

/// Why a reveal was counted but left the board untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Every pair is already matched.
    GameOver,
    /// The position belongs to a committed pair.
    AlreadyMatched,
    /// The position is the card already face-up awaiting its partner.
    AlreadyPending,
}

/// Result of a single reveal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// First card of an attempt is now face-up.
    Opened,
    /// Second card matched `partner`; the pair is committed.
    Matched { partner: Position },
    /// Like `Matched`, and the commit finished the board.
    Completed { partner: Position },
    /// Second card did not match; `retracted` was flipped back.
    Mismatched { retracted: Position },
    Ignored(IgnoreReason),
}

impl RevealOutcome {
    /// True when the set of face-up cards changed.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored(_))
    }

    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}
