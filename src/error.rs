//! Error types for card construction and parsing.
//!
//! Deck operations themselves are total and never fail.

use thiserror::Error;

/// Errors that can occur when building a card from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit value outside 0..=3.
    #[error("invalid suit value {0}")]
    InvalidSuit(u8),
    /// Rank value outside 1..=13.
    #[error("invalid rank value {0}")]
    InvalidRank(u8),
}

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Text does not name a suit.
    #[error("unknown suit")]
    UnknownSuit,
    /// Text does not name a rank.
    #[error("unknown rank")]
    UnknownRank,
    /// Text is not of the form `<Rank> of <Suit>s`.
    #[error("expected `<rank> of <suit>`")]
    MissingSeparator,
}
