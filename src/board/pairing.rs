//! Pending half-pair state.

use crate::core::Position;

/// Whether a card is face-up waiting for its partner.
///
/// A board holds at most one pending card; the variant makes that
/// structural instead of a length check on a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum PairingState {
    /// No card awaiting a partner.
    #[default]
    Empty,
    /// The card at this position is face-up awaiting a partner.
    Pending(Position),
}

impl PairingState {
    #[must_use]
    pub(crate) const fn pending(self) -> Option<Position> {
        match self {
            Self::Empty => None,
            Self::Pending(position) => Some(position),
        }
    }

    #[must_use]
    pub(crate) const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub(crate) fn from_pending(pending: Option<Position>) -> Self {
        pending.map_or(Self::Empty, Self::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(PairingState::default(), PairingState::Empty);
        assert!(PairingState::Empty.is_empty());
        assert_eq!(PairingState::Empty.pending(), None);
    }

    #[test]
    fn test_pending_roundtrip() {
        let state = PairingState::from_pending(Some(Position(3)));
        assert_eq!(state, PairingState::Pending(Position(3)));
        assert_eq!(state.pending(), Some(Position(3)));
        assert!(!state.is_empty());
        assert_eq!(PairingState::from_pending(None), PairingState::Empty);
    }
}
