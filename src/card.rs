//! Card types: suits, ranks and the card value itself.

use core::fmt;
use core::str::FromStr;

use crate::error::{CardError, ParseCardError};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
///
/// Suits are listed in deck order; [`Suit::ordinal`] follows the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Position of the suit in deck order, from 0 (Spade) to 3 (Heart).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Spade => 0,
            Self::Diamond => 1,
            Self::Club => 2,
            Self::Heart => 3,
        }
    }

    /// Canonical singular name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(CardError::InvalidSuit(value))
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    /// Parses a suit name, singular or plural, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|suit| {
                let name = suit.name();
                s.eq_ignore_ascii_case(name)
                    || s
                        .strip_suffix(['s', 'S'])
                        .is_some_and(|singular| singular.eq_ignore_ascii_case(name))
            })
            .ok_or(ParseCardError::UnknownSuit)
    }
}

/// Card rank, from Ace (1) to King (13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Lowest rank.
    pub const MIN: Self = Self::Ace;
    /// Highest rank.
    pub const MAX: Self = Self::King;

    /// Numeric value of the rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
        }
    }

    /// Canonical name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        value
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize))
            .copied()
            .ok_or(CardError::InvalidRank(value))
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|rank| s.eq_ignore_ascii_case(rank.name()))
            .ok_or(ParseCardError::UnknownRank)
    }
}

/// A playing card.
///
/// Equality is structural: two cards are equal when both suit and rank match.
/// Ordering follows [`absolute_rank`](crate::order::absolute_rank), so suits
/// outweigh ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a card from raw suit (0..=3) and rank (1..=13) values.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, CardError, Rank, Suit};
    ///
    /// assert_eq!(Card::from_raw(3, 1), Ok(Card::new(Suit::Heart, Rank::Ace)));
    /// assert_eq!(Card::from_raw(4, 1), Err(CardError::InvalidSuit(4)));
    /// ```
    pub fn from_raw(suit: u8, rank: u8) -> Result<Self, CardError> {
        Ok(Self::new(Suit::try_from(suit)?, Rank::try_from(rank)?))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the display form, e.g. `"Ace of Hearts"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = s
            .trim()
            .split_once(" of ")
            .ok_or(ParseCardError::MissingSeparator)?;
        Ok(Self::new(suit.parse()?, rank.parse()?))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        crate::order::absolute_rank(*self).cmp(&crate::order::absolute_rank(*other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suit_names_accept_plural() {
        assert_eq!("Hearts".parse::<Suit>(), Ok(Suit::Heart));
        assert_eq!("spade".parse::<Suit>(), Ok(Suit::Spade));
        assert_eq!("Heartz".parse::<Suit>(), Err(ParseCardError::UnknownSuit));
        assert_eq!("Heartss".parse::<Suit>(), Err(ParseCardError::UnknownSuit));
    }

    #[test]
    fn raw_values_are_bounded() {
        assert_eq!(Suit::try_from(0), Ok(Suit::Spade));
        assert_eq!(Suit::try_from(4), Err(CardError::InvalidSuit(4)));
        assert_eq!(Rank::try_from(0), Err(CardError::InvalidRank(0)));
        assert_eq!(Rank::try_from(13), Ok(Rank::King));
        assert_eq!(Rank::try_from(14), Err(CardError::InvalidRank(14)));
    }
}
