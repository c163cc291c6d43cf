//! Deck construction, shuffling, and dealing.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::hand::sort_for_display;
use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS};
use crate::errors::{DomainError, ValidationKind};

/// An ordered sequence of unique cards, built once per hand of play and
/// fully consumed by dealing.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The 52-card universe: thirteen ranks across four suits, minus the
    /// 2♥ and 2♣, plus BigJoker♠ and ExtraJoker♠. Deterministic order.
    pub fn standard() -> Self {
        let suits = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
        let ranks = [
            Rank::Ace,
            Rank::King,
            Rank::Queen,
            Rank::Jack,
            Rank::Ten,
            Rank::Nine,
            Rank::Eight,
            Rank::Seven,
            Rank::Six,
            Rank::Five,
            Rank::Four,
            Rank::Three,
            Rank::Two,
        ];

        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in suits {
            for rank in ranks {
                // The 2♥ and 2♣ make room for the jokers.
                if rank == Rank::Two && matches!(suit, Suit::Hearts | Suit::Clubs) {
                    continue;
                }
                cards.push(Card { suit, rank });
            }
        }
        cards.push(Card {
            suit: Suit::Spades,
            rank: Rank::BigJoker,
        });
        cards.push(Card {
            suit: Suit::Spades,
            rank: Rank::ExtraJoker,
        });
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Uniform in-place permutation (Fisher-Yates, via `rand`).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the first `n` cards.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DomainError> {
        if n > self.cards.len() {
            return Err(DomainError::validation(
                ValidationKind::InsufficientCards,
                format!("Requested {n} cards with {} remaining", self.cards.len()),
            ));
        }
        Ok(self.cards.drain(..n).collect())
    }
}

/// Deal a full hand of play: seeded shuffle, thirteen cards to each of
/// the four seats. Consumes the whole deck; hands come back
/// display-sorted.
pub fn deal_hands(seed: u64) -> Result<[Vec<Card>; PLAYERS], DomainError> {
    let mut deck = Deck::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for hand_slot in hands.iter_mut() {
        let mut hand = deck.deal(HAND_SIZE)?;
        sort_for_display(&mut hand);
        *hand_slot = hand;
    }
    debug_assert!(deck.is_empty());
    Ok(hands)
}
