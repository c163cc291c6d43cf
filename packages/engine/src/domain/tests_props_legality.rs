//! Property-based tests for the legal-play rules.

use proptest::prelude::*;

use crate::domain::hand::legal_plays;
use crate::domain::rules::is_card_legal;
use crate::domain::{hand_has_suit, test_gens, test_prelude, Card, Suit};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Holding the leading suit, the legal set is exactly the cards of
    /// that suit, in hand order.
    #[test]
    fn prop_follow_suit_legality(
        lead_card in test_gens::card(),
        other_cards in test_gens::unique_cards_up_to(12),
        spades_broken in any::<bool>(),
    ) {
        let lead_suit = lead_card.suit;
        let mut hand = vec![lead_card];
        for card in other_cards {
            if card != lead_card {
                hand.push(card);
            }
        }

        let legal = legal_plays(&hand, Some(lead_suit), spades_broken);
        let expected: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|c| c.suit == lead_suit)
            .collect();
        prop_assert_eq!(legal, expected);
    }

    /// Void in the leading suit, the whole hand is legal regardless of
    /// the broken flag.
    #[test]
    fn prop_void_seat_plays_anything(
        (lead_suit, hand) in test_gens::suit().prop_flat_map(|s| {
            (Just(s), test_gens::hand_without_suit(s))
        }),
        spades_broken in any::<bool>(),
    ) {
        let legal = legal_plays(&hand, Some(lead_suit), spades_broken);
        prop_assert_eq!(legal, hand);
    }

    /// `legal_plays` agrees with the pure predicate card by card, except
    /// for the documented forced-lead exception (all-spades hand leading
    /// before the break), where the whole hand is legal.
    #[test]
    fn prop_legal_plays_matches_predicate(
        hand in test_gens::hand(),
        leading_suit in proptest::option::of(test_gens::suit()),
        spades_broken in any::<bool>(),
    ) {
        let legal = legal_plays(&hand, leading_suit, spades_broken);

        let lacks_leading = match leading_suit {
            Some(lead) => !hand_has_suit(&hand, lead),
            None => true,
        };
        let strict: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|&c| is_card_legal(c, leading_suit, spades_broken, lacks_leading))
            .collect();

        let forced_lead = strict.is_empty() && leading_suit.is_none() && !hand.is_empty();
        if forced_lead {
            prop_assert!(hand.iter().all(|c| c.suit == Suit::Spades));
            prop_assert_eq!(legal, hand);
        } else {
            prop_assert_eq!(legal, strict);
        }
    }

    /// A non-empty hand always has at least one legal play.
    #[test]
    fn prop_legal_plays_never_empty_for_nonempty_hand(
        hand in test_gens::hand(),
        leading_suit in proptest::option::of(test_gens::suit()),
        spades_broken in any::<bool>(),
    ) {
        let legal = legal_plays(&hand, leading_suit, spades_broken);
        prop_assert!(!legal.is_empty());
        for card in &legal {
            prop_assert!(hand.contains(card));
        }
    }

    /// Leading before the break with any non-spade in hand, no spade is
    /// offered.
    #[test]
    fn prop_unbroken_lead_excludes_spades(
        hand in test_gens::hand(),
    ) {
        let legal = legal_plays(&hand, None, false);
        if hand.iter().any(|c| c.suit != Suit::Spades) {
            prop_assert!(legal.iter().all(|c| c.suit != Suit::Spades));
        }
    }
}
