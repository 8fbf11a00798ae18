//! Card model integration tests.

use deckrs::{Card, CardError, ParseCardError, Rank, Suit};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn card_display_matches_names() {
    assert_eq!(card(Suit::Heart, Rank::Ace).to_string(), "Ace of Hearts");
    assert_eq!(card(Suit::Spade, Rank::Two).to_string(), "Two of Spades");
    assert_eq!(card(Suit::Diamond, Rank::Nine).to_string(), "Nine of Diamonds");
    assert_eq!(card(Suit::Club, Rank::Jack).to_string(), "Jack of Clubs");
}

#[test]
fn suit_and_rank_display() {
    let suits: Vec<String> = Suit::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(suits, ["Spade", "Diamond", "Club", "Heart"]);

    assert_eq!(Rank::Ace.to_string(), "Ace");
    assert_eq!(Rank::Ten.to_string(), "Ten");
    assert_eq!(Rank::King.to_string(), "King");
}

#[test]
fn ordinals_are_contiguous() {
    for (index, suit) in Suit::ALL.into_iter().enumerate() {
        assert_eq!(suit.ordinal() as usize, index);
    }
    for (index, rank) in Rank::ALL.into_iter().enumerate() {
        assert_eq!(rank.ordinal() as usize, index + 1);
    }
    assert_eq!(Rank::MIN, Rank::Ace);
    assert_eq!(Rank::MAX, Rank::King);
}

#[test]
fn equality_is_structural() {
    assert_eq!(card(Suit::Club, Rank::Four), card(Suit::Club, Rank::Four));
    assert_ne!(card(Suit::Club, Rank::Four), card(Suit::Heart, Rank::Four));
    assert_ne!(card(Suit::Club, Rank::Four), card(Suit::Club, Rank::Five));
}

#[test]
fn from_raw_validates_range() {
    assert_eq!(
        Card::from_raw(1, 7).unwrap(),
        card(Suit::Diamond, Rank::Seven)
    );
    assert_eq!(Card::from_raw(4, 7).unwrap_err(), CardError::InvalidSuit(4));
    assert_eq!(Card::from_raw(0, 0).unwrap_err(), CardError::InvalidRank(0));
    assert_eq!(Card::from_raw(0, 14).unwrap_err(), CardError::InvalidRank(14));
    assert_eq!(CardError::InvalidRank(14).to_string(), "invalid rank value 14");
}

#[test]
fn parse_accepts_display_form() {
    for card in deckrs::new() {
        assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
    }
    assert_eq!(
        "  queen of hearts ".parse::<Card>().unwrap(),
        card(Suit::Heart, Rank::Queen)
    );
}

#[test]
fn parse_errors() {
    assert_eq!(
        "Ace Hearts".parse::<Card>().unwrap_err(),
        ParseCardError::MissingSeparator
    );
    assert_eq!(
        "One of Hearts".parse::<Card>().unwrap_err(),
        ParseCardError::UnknownRank
    );
    assert_eq!(
        "Ace of Stars".parse::<Card>().unwrap_err(),
        ParseCardError::UnknownSuit
    );
}

#[test]
fn ordering_follows_absolute_rank() {
    let mut cards = vec![
        card(Suit::Heart, Rank::Ace),
        card(Suit::Spade, Rank::King),
        card(Suit::Diamond, Rank::Ace),
    ];
    cards.sort();
    assert_eq!(
        cards,
        [
            card(Suit::Spade, Rank::King),
            card(Suit::Diamond, Rank::Ace),
            card(Suit::Heart, Rank::Ace),
        ]
    );
}
