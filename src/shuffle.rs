//! Seeded shuffling.
//!
//! Every shuffle seeds a fresh [`ChaCha8Rng`] from an explicit [`ShuffleSeed`],
//! so the same seed applied to the same input always yields the same
//! permutation, independent of any shuffle that ran before it.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

/// Seed for a deterministic shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShuffleSeed(u64);

impl ShuffleSeed {
    /// Creates a seed from a raw value.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Creates a seed from the current wall-clock time, in whole seconds.
    ///
    /// Falls back to 0 if the clock reads before the Unix epoch.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_clock() -> Self {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Self(secs)
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Builds the generator this seed drives.
    #[must_use]
    pub fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }
}

impl From<u64> for ShuffleSeed {
    fn from(seed: u64) -> Self {
        Self(seed)
    }
}

/// Shuffles cards in place using the given generator.
///
/// Uses a Fisher-Yates permutation. Empty and single-card slices are left
/// unchanged.
pub fn shuffle_with<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Shuffles cards in place with a generator freshly seeded from `seed`.
///
/// # Example
///
/// ```
/// use deckrs::{ShuffleSeed, shuffle_in_place};
///
/// let mut a = deckrs::new();
/// let mut b = deckrs::new();
/// shuffle_in_place(&mut a, ShuffleSeed::new(7));
/// shuffle_in_place(&mut b, ShuffleSeed::new(7));
/// assert_eq!(a, b);
/// ```
pub fn shuffle_in_place(cards: &mut [Card], seed: ShuffleSeed) {
    log::debug!("shuffling {} cards with seed {}", cards.len(), seed.0);
    let mut rng = seed.rng();
    shuffle_with(cards, &mut rng);
}

/// Returns an option that shuffles the deck with the given seed.
///
/// # Example
///
/// ```
/// use deckrs::{DeckBuilder, ShuffleSeed, asc_sort, shuffle};
///
/// let first = DeckBuilder::new()
///     .with_option(asc_sort)
///     .with_option(shuffle(ShuffleSeed::new(0)))
///     .build();
/// let second = DeckBuilder::new()
///     .with_option(asc_sort)
///     .with_option(shuffle(ShuffleSeed::new(0)))
///     .build();
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn shuffle(seed: impl Into<ShuffleSeed>) -> impl FnOnce(Vec<Card>) -> Vec<Card> {
    let seed = seed.into();
    move |mut cards: Vec<Card>| {
        shuffle_in_place(&mut cards, seed);
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_round_trips_through_accessors() {
        let seed = ShuffleSeed::from(9_u64);
        assert_eq!(seed, ShuffleSeed::new(9));
        assert_eq!(seed.value(), 9);
    }

    #[cfg(feature = "std")]
    #[test]
    fn clock_seed_is_not_zero() {
        assert_ne!(ShuffleSeed::from_clock().value(), 0);
    }
}
