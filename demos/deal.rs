//! Deals a few hands from a shuffled deck.
//!
//! Pass a seed as the first argument for a repeatable deal.

use deckrs::{Card, DeckBuilder, Rank, ShuffleSeed};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .map_or_else(ShuffleSeed::from_clock, ShuffleSeed::new);
    println!("Seed: {}", seed.value());

    let mut deck = DeckBuilder::new()
        .with_filter(|card| matches!(card.rank, Rank::Two | Rank::Three | Rank::Four | Rank::Five))
        .with_shuffle(seed)
        .build();
    println!("Dealing from {} cards", deck.len());

    for player in 1..=4 {
        let hand: Vec<Card> = deck.drain(..5).collect();
        let names: Vec<String> = hand.iter().map(ToString::to_string).collect();
        println!("Player {player}: {}", names.join(", "));
    }

    println!("{} cards left", deck.len());
}
