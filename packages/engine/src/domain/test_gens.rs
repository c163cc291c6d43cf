//! Proptest generators for domain types.
//!
//! All card generators draw from the real 52-card universe (jokers in,
//! red/black twos out) so properties exercise exactly the cards the
//! game can produce.

use proptest::prelude::*;

use crate::domain::dealing::Deck;
use crate::domain::state::Seat;
use crate::domain::{Card, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

/// Generate a Seat (0-3)
pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=3u8
}

/// Generate a single card from the 52-card universe
pub fn card() -> impl Strategy<Value = Card> {
    proptest::sample::select(Deck::standard().cards().to_vec())
}

/// Generate a vector of exactly `count` unique cards
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(Deck::standard().cards().to_vec())
        .prop_shuffle()
        .prop_map(move |cards| cards[..count].to_vec())
}

/// Generate a vector of 1 to `max_count` unique cards
pub fn unique_cards_up_to(max_count: usize) -> impl Strategy<Value = Vec<Card>> {
    (1..=max_count).prop_flat_map(unique_cards)
}

/// Generate a hand (1-13 unique cards)
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    unique_cards_up_to(13)
}

/// Generate a hand containing NO cards of the given suit
pub fn hand_without_suit(excluded_suit: Suit) -> impl Strategy<Value = Vec<Card>> {
    let pool: Vec<Card> = Deck::standard()
        .cards()
        .iter()
        .copied()
        .filter(|c| c.suit != excluded_suit)
        .collect();
    Just(pool)
        .prop_shuffle()
        .prop_flat_map(|cards| (1..=13usize, Just(cards)))
        .prop_map(|(n, cards)| cards[..n].to_vec())
}

/// Complete trick: a leader seat plus 4 unique cards in play order,
/// mapped to seats in rotation from the leader.
pub fn complete_trick() -> impl Strategy<Value = Vec<(Seat, Card)>> {
    (seat(), unique_cards(4)).prop_map(|(leader, cards)| {
        cards
            .into_iter()
            .enumerate()
            .map(|(i, card)| ((leader + i as Seat) % 4, card))
            .collect()
    })
}
