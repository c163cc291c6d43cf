//! Property-based tests for shuffling and dealing.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::dealing::{deal_hands, Deck};
use crate::domain::rules::{DECK_SIZE, HAND_SIZE};
use crate::domain::{test_prelude, Card};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Dealing partitions the 52-card universe: four hands of thirteen,
    /// no duplicates, nothing left in the deck.
    #[test]
    fn prop_deal_conserves_the_universe(seed in any::<u64>()) {
        let hands = deal_hands(seed).unwrap();
        let mut seen: HashSet<Card> = HashSet::new();
        for hand in &hands {
            prop_assert_eq!(hand.len(), HAND_SIZE);
            for &card in hand {
                prop_assert!(seen.insert(card), "card {:?} dealt twice", card);
            }
        }
        prop_assert_eq!(seen.len(), DECK_SIZE);
        prop_assert_eq!(
            seen,
            Deck::standard().cards().iter().copied().collect::<HashSet<Card>>()
        );
    }

    /// A shuffle preserves the multiset and, with overwhelming
    /// probability, changes the ordering.
    #[test]
    fn prop_shuffle_permutes(seed in any::<u64>()) {
        let mut deck = Deck::standard();
        let before = deck.cards().to_vec();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        deck.shuffle(&mut rng);

        let before_set: HashSet<Card> = before.iter().copied().collect();
        let after_set: HashSet<Card> = deck.cards().iter().copied().collect();
        prop_assert_eq!(before_set, after_set);
        prop_assert_ne!(deck.cards(), &before[..]);
    }

    /// Same seed, same deal; the deal is a pure function of its seed.
    #[test]
    fn prop_deal_is_deterministic(seed in any::<u64>()) {
        prop_assert_eq!(deal_hands(seed).unwrap(), deal_hands(seed).unwrap());
    }
}
