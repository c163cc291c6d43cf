//! Card strength comparison. Spades are the permanent trump suit.

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Whether `a` beats `b` in a trick led with `lead`.
///
/// Any spade beats any non-spade; within spades the higher rank wins,
/// and the jokers are the two top spade ranks, so joker precedence
/// (BigJoker over ExtraJoker over A♠) falls out of the rank ordering.
/// Among non-spades only cards of the leading suit compete; an off-suit
/// discard never beats anything.
pub fn card_beats(a: Card, b: Card, lead: Suit) -> bool {
    let a_trump = a.suit == Suit::Spades;
    let b_trump = b.suit == Suit::Spades;
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    if a_trump && b_trump {
        return a.rank > b.rank;
    }
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.rank > b.rank;
    }
    false
}
