//! Card ranking and sort options.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Returns the total-order key of a card.
///
/// The key is `suit ordinal * 13 + rank ordinal`, so every Spade sorts below
/// every Diamond, every Diamond below every Club, and so on. The 52 canonical
/// cards all have distinct keys in `1..=52`.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Rank, Suit, absolute_rank};
///
/// assert_eq!(absolute_rank(Card::new(Suit::Spade, Rank::Ace)), 1);
/// assert_eq!(absolute_rank(Card::new(Suit::Heart, Rank::King)), 52);
/// ```
#[must_use]
pub const fn absolute_rank(card: Card) -> u8 {
    card.suit.ordinal() * Rank::MAX.ordinal() + card.rank.ordinal()
}

/// Default two-index predicate: `true` if `cards[i]` ranks below `cards[j]`.
///
/// Pass it to [`sort`] for an ascending order, or wrap it to build others.
///
/// # Panics
///
/// Panics if `i` or `j` is out of bounds.
#[must_use]
pub fn less(cards: &[Card], i: usize, j: usize) -> bool {
    absolute_rank(cards[i]) < absolute_rank(cards[j])
}

/// Sorts cards by ascending [`absolute_rank`].
///
/// Cards with equal keys (duplicates) keep no particular relative order.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Rank, Suit, asc_sort};
///
/// let cards = asc_sort(vec![
///     Card::new(Suit::Heart, Rank::Two),
///     Card::new(Suit::Spade, Rank::King),
/// ]);
/// assert_eq!(cards[0], Card::new(Suit::Spade, Rank::King));
/// ```
#[must_use]
pub fn asc_sort(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_unstable_by_key(|card| absolute_rank(*card));
    cards
}

/// Returns an option that sorts with a caller-supplied two-index predicate.
///
/// The predicate is handed the sequence being sorted along with two indices
/// into it, and returns `true` if the card at the first index belongs before
/// the card at the second. Indices always refer to the sequence as it was
/// before sorting. Equal cards keep their relative order. The sort never
/// panics: a predicate that is not a consistent ordering still yields some
/// permutation of the input.
///
/// # Example
///
/// ```
/// use deckrs::{Card, DeckBuilder, Rank, Suit, absolute_rank, sort};
///
/// let descending = |cards: &[Card], i: usize, j: usize| {
///     absolute_rank(cards[i]) > absolute_rank(cards[j])
/// };
/// let cards = DeckBuilder::new().with_option(sort(descending)).build();
/// assert_eq!(cards[0], Card::new(Suit::Heart, Rank::King));
/// ```
#[must_use]
pub fn sort<L>(less: L) -> impl FnOnce(Vec<Card>) -> Vec<Card>
where
    L: Fn(&[Card], usize, usize) -> bool,
{
    move |cards: Vec<Card>| {
        let mut order: Vec<usize> = (0..cards.len()).collect();
        merge_sort(&mut order, |i, j| less(cards.as_slice(), i, j));
        order.into_iter().map(|i| cards[i]).collect()
    }
}

/// Bottom-up merge sort over indices.
///
/// Only ever asks whether the right-hand item belongs before the left-hand
/// one, so any predicate leaves `items` a permutation of its input. Ties keep
/// their original order.
fn merge_sort<F>(items: &mut [usize], mut less: F)
where
    F: FnMut(usize, usize) -> bool,
{
    let len = items.len();
    let mut merged = items.to_vec();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);
            for slot in &mut merged[start..end] {
                if left < mid && (right >= end || !less(items[right], items[left])) {
                    *slot = items[left];
                    left += 1;
                } else {
                    *slot = items[right];
                    right += 1;
                }
            }
            start = end;
        }
        items.copy_from_slice(&merged);
        width *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn suits_outweigh_ranks() {
        let king_of_spades = Card::new(Suit::Spade, Rank::King);
        let ace_of_diamonds = Card::new(Suit::Diamond, Rank::Ace);
        assert_eq!(absolute_rank(king_of_spades), 13);
        assert_eq!(absolute_rank(ace_of_diamonds), 14);
        assert!(king_of_spades < ace_of_diamonds);
    }

    #[test]
    fn sort_handles_empty_and_single() {
        assert!(sort(less)(Vec::new()).is_empty());
        let one = alloc::vec![Card::new(Suit::Club, Rank::Five)];
        assert_eq!(sort(less)(one.clone()), one);
    }
}
