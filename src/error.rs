//! Error types surfaced to callers of the engine.

use thiserror::Error;

/// Errors raised at the engine boundary.
///
/// Declined erases and deck exhaustion are not errors: they are reported
/// through [`ActionEffect`](crate::core::ActionEffect).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A textual command outside the action vocabulary.
    #[error("unrecognized command: {0:?}")]
    UnrecognizedCommand(String),

    /// A game needs at least one card.
    #[error("deck count must be positive, got {0}")]
    InvalidDeckCount(u32),

    /// A fixed deck order that is not a permutation of `1..=deck_count`.
    #[error("deck order must hold each card 1..={deck_count} exactly once, got {order:?}")]
    InvalidDeckOrder { deck_count: u32, order: Vec<u32> },
}
