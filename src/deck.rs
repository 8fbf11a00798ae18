//! Deck construction, filtering and membership queries.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::order::{asc_sort, sort};
use crate::shuffle::{ShuffleSeed, shuffle};

/// A deck transformation: takes the current sequence, returns the next one.
pub type DeckOption<'a> = Box<dyn FnOnce(Vec<Card>) -> Vec<Card> + 'a>;

/// Returns the canonical 52-card deck.
///
/// Cards are ordered by suit (Spade, Diamond, Club, Heart), then by rank
/// (Ace through King) within each suit.
#[must_use]
pub fn new() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// Builds a deck by threading the canonical deck through a chain of options.
///
/// Options run in the order they were added. Any `FnOnce(Vec<Card>) -> Vec<Card>`
/// is an option; it may reorder, shrink, grow or keep the sequence.
///
/// ```
/// use deckrs::{Card, DeckBuilder, Rank, Suit};
///
/// let cards = DeckBuilder::new()
///     .with_filter(|card| card.rank == Rank::Ace)
///     .with_asc_sort()
///     .build();
/// assert_eq!(cards.len(), 48);
/// assert_eq!(cards[0], Card::new(Suit::Spade, Rank::Two));
/// ```
#[must_use = "a builder does nothing until `build` is called"]
#[derive(Default)]
pub struct DeckBuilder<'a> {
    options: Vec<DeckOption<'a>>,
}

impl<'a> DeckBuilder<'a> {
    /// Creates a builder with no options.
    pub const fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Appends an arbitrary option.
    pub fn with_option<F>(mut self, option: F) -> Self
    where
        F: FnOnce(Vec<Card>) -> Vec<Card> + 'a,
    {
        self.options.push(Box::new(option));
        self
    }

    /// Appends an ascending sort by absolute rank.
    pub fn with_asc_sort(self) -> Self {
        self.with_option(asc_sort)
    }

    /// Appends a sort driven by a two-index predicate. See [`sort`].
    pub fn with_sort<L>(self, less: L) -> Self
    where
        L: Fn(&[Card], usize, usize) -> bool + 'a,
    {
        self.with_option(sort(less))
    }

    /// Appends a seeded shuffle.
    pub fn with_shuffle(self, seed: impl Into<ShuffleSeed>) -> Self {
        let seed: ShuffleSeed = seed.into();
        self.with_option(shuffle(seed))
    }

    /// Appends a filter that removes every card matching `predicate`.
    pub fn with_filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&Card) -> bool + 'a,
    {
        self.with_option(filter(predicate))
    }

    /// Returns the number of queued options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns whether no options are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Builds the canonical deck and applies every option in order.
    #[must_use]
    pub fn build(self) -> Vec<Card> {
        self.options
            .into_iter()
            .enumerate()
            .fold(new(), |cards, (index, option)| {
                log::trace!("applying deck option {index} to {} cards", cards.len());
                option(cards)
            })
    }
}

impl core::fmt::Debug for DeckBuilder<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DeckBuilder")
            .field("options", &self.options.len())
            .finish()
    }
}

/// Returns an option that removes every card for which `predicate` is `true`.
///
/// The retained cards keep their relative order.
///
/// ```
/// use deckrs::{Suit, filter};
///
/// let no_hearts = filter(|card| card.suit == Suit::Heart)(deckrs::new());
/// assert_eq!(no_hearts.len(), 39);
/// ```
#[must_use]
pub fn filter<P>(predicate: P) -> impl FnOnce(Vec<Card>) -> Vec<Card>
where
    P: Fn(&Card) -> bool,
{
    move |cards: Vec<Card>| {
        cards
            .into_iter()
            .filter(|card| !predicate(card))
            .collect()
    }
}

/// Returns whether `card` appears anywhere in `cards`.
#[must_use]
pub fn exists(card: Card, cards: &[Card]) -> bool {
    cards.contains(&card)
}
