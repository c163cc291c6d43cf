//! Card parsing from compact string tokens (e.g. "AS", "2C", "BS")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::{DomainError, ValidationKind};

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Parse card: {s:?}"),
            ));
        };
        let rank = match rank_ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            'X' => Rank::ExtraJoker,
            'B' => Rank::BigJoker,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::InvalidRank,
                    format!("Invalid rank in card token: {s}"),
                ))
            }
        };
        let suit = match suit_ch {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::InvalidSuit,
                    format!("Invalid suit in card token: {s}"),
                ))
            }
        };
        // Jokers only exist with the spade suit.
        if rank.is_joker() && suit != Suit::Spades {
            return Err(DomainError::validation(
                ValidationKind::InvalidSuit,
                format!("Jokers carry the spade suit: {s}"),
            ));
        }
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
/// Fails on the first invalid token.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
