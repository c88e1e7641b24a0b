//! The board engine: layout generation, reveal handling, completion.
//!
//! ## Reveal rules
//!
//! With no card face-up, any unmatched position opens. With a card pending,
//! the next reveal either matches it (both stay face-up for good) or
//! mismatches (the pending card flips back; the new one never shows).
//! Reveals of the pending card itself, of already matched cards, or on a
//! finished board change nothing but still count as moves.
//!
//! ```
//! use memory_match::board::{Board, Layout, RevealOutcome};
//! use memory_match::core::Position;
//!
//! let mut board = Board::from_layout(Layout::from_symbols(["A", "B", "A", "B"])?);
//!
//! assert_eq!(board.reveal(Position(0))?, RevealOutcome::Opened);
//! assert_eq!(
//!     board.reveal(Position(1))?,
//!     RevealOutcome::Mismatched { retracted: Position(0) }
//! );
//! assert_eq!(board.open_count(), 2);
//! # Ok::<(), memory_match::core::GameError>(())
//! ```

mod engine;
mod layout;
mod outcome;
mod pairing;
mod record;
mod view;

pub use engine::Board;
pub use layout::Layout;
pub use outcome::{IgnoreReason, RevealOutcome};
pub use record::BoardRecord;
pub use view::GameInfo;
