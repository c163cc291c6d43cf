//! Baseline policy: shed the cheapest legal card.

use super::trait_def::{PlayPolicy, PlayView, PolicyError};
use crate::domain::Card;

/// Plays the lowest-ranked legal card of the leading suit when holding
/// one, otherwise the lowest-ranked legal card overall. Conserves high
/// cards; entirely deterministic.
#[derive(Debug, Default, Clone)]
pub struct Baseline;

impl Baseline {
    pub const NAME: &'static str = "baseline";

    pub(super) fn lowest(cards: impl Iterator<Item = Card>) -> Option<Card> {
        cards.min_by_key(|c| c.rank)
    }
}

impl PlayPolicy for Baseline {
    fn choose_card(&self, view: &PlayView<'_>) -> Result<Card, PolicyError> {
        if view.legal_plays.is_empty() {
            return Err(PolicyError::InvalidMove("No legal plays offered".into()));
        }
        if let Some(lead) = view.leading_card.map(|c| c.suit) {
            let in_suit = view.legal_plays.iter().copied().filter(|c| c.suit == lead);
            if let Some(low) = Self::lowest(in_suit) {
                return Ok(low);
            }
        }
        Self::lowest(view.legal_plays.iter().copied())
            .ok_or_else(|| PolicyError::Internal("legal plays vanished mid-choice".into()))
    }
}
