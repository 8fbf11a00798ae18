//! A standard 52-card deck with optional `no_std` support.
//!
//! [`new`] produces the canonical deck, ordered by suit (Spade, Diamond, Club,
//! Heart) and then by rank (Ace through King). [`DeckBuilder`] threads that
//! deck through a chain of options such as [`asc_sort`], [`sort`],
//! [`shuffle`] and [`filter`], applied in the order they were added.
//!
//! # Example
//!
//! ```
//! use deckrs::{Card, DeckBuilder, Rank, ShuffleSeed, Suit, exists};
//!
//! let cards = DeckBuilder::new()
//!     .with_filter(|card| card.suit == Suit::Club)
//!     .with_shuffle(ShuffleSeed::new(42))
//!     .build();
//!
//! assert_eq!(cards.len(), 39);
//! assert!(!exists(Card::new(Suit::Club, Rank::Ace), &cards));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod order;
pub mod shuffle;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{DeckBuilder, DeckOption, exists, filter, new};
pub use error::{CardError, ParseCardError};
pub use order::{absolute_rank, asc_sort, less, sort};
pub use shuffle::{ShuffleSeed, shuffle, shuffle_in_place, shuffle_with};
