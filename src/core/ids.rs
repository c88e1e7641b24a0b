//! Identifier and value newtypes.
//!
//! All of these serialize transparently (a `Position` is a bare integer, a
//! `Symbol` a bare string) so the stored board record keeps the plain
//! schema external collaborators expect.

use serde::{Deserialize, Serialize};

/// Card slot index on a board, in `[0, card_count)`.
///
/// Positions are assigned at board creation and never change.
///
/// ```
/// use memory_match::core::Position;
///
/// let pos = Position::new(3);
/// assert_eq!(pos.index(), 3);
/// assert_eq!(pos.to_string(), "3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(pub u32);

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the position as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Iterate over every position of a board with `card_count` cards.
    ///
    /// Counts past `u32::MAX` stop at the last addressable position.
    pub fn all(card_count: usize) -> impl Iterator<Item = Position> {
        (0..u32::try_from(card_count).unwrap_or(u32::MAX)).map(Position)
    }
}

impl From<u32> for Position {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Face value of a card. Each symbol appears on exactly two cards.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Label of the `ordinal`-th symbol of a generated board (1-based).
    ///
    /// ```
    /// use memory_match::core::Symbol;
    ///
    /// assert_eq!(Symbol::numbered(1).as_str(), "1");
    /// assert_eq!(Symbol::numbered(12).as_str(), "12");
    /// ```
    #[must_use]
    pub fn numbered(ordinal: usize) -> Self {
        Self(ordinal.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for Symbol {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl From<String> for Symbol {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Identifier of a stored game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl GameId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owner of games and of a best-score record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub u64);

impl OwnerId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Owner({})", self.0)
    }
}
