//! Partner-aware policy: read the partial trick before spending strength.

use super::baseline::Baseline;
use super::trait_def::{PlayPolicy, PlayView, PolicyError};
use crate::domain::state::{partner_of, Seat};
use crate::domain::{card_beats, Card, Suit};

/// Considers the partner's play before choosing. When the partner
/// already holds the trick, sheds the lowest legal card instead of
/// wasting strength; otherwise presses with the highest card of the
/// leading suit when able to follow, falling back to the baseline
/// off-suit behavior.
#[derive(Debug, Default, Clone)]
pub struct PartnerAware;

impl PartnerAware {
    pub const NAME: &'static str = "partner-aware";

    fn highest(cards: impl Iterator<Item = Card>) -> Option<Card> {
        cards.max_by_key(|c| c.rank)
    }

    /// The play currently winning the partial trick.
    fn current_winner(plays: &[(Seat, Card)]) -> Option<(Seat, Card)> {
        let first = *plays.first()?;
        let lead = first.1.suit;
        let mut best = first;
        for &play in &plays[1..] {
            if card_beats(play.1, best.1, lead) {
                best = play;
            }
        }
        Some(best)
    }

    /// Whether the partner holds the trick firmly enough to dump on:
    /// their card is the current winner, and either no opponent is left
    /// to act or they cut a non-spade lead with a spade.
    fn partner_secured(view: &PlayView<'_>) -> bool {
        let Some((winning_seat, winning_card)) = Self::current_winner(view.trick_plays) else {
            return false;
        };
        if winning_seat != partner_of(view.seat) {
            return false;
        }
        let lead = view.trick_plays[0].1.suit;
        let last_to_act = view.trick_plays.len() == 3;
        let cut_with_spade = winning_card.suit == Suit::Spades && lead != Suit::Spades;
        last_to_act || cut_with_spade
    }
}

impl PlayPolicy for PartnerAware {
    fn choose_card(&self, view: &PlayView<'_>) -> Result<Card, PolicyError> {
        if view.legal_plays.is_empty() {
            return Err(PolicyError::InvalidMove("No legal plays offered".into()));
        }
        if Self::partner_secured(view) {
            return Baseline::lowest(view.legal_plays.iter().copied())
                .ok_or_else(|| PolicyError::Internal("legal plays vanished mid-choice".into()));
        }
        if let Some(lead) = view.leading_card.map(|c| c.suit) {
            let in_suit = view.legal_plays.iter().copied().filter(|c| c.suit == lead);
            if let Some(high) = Self::highest(in_suit) {
                return Ok(high);
            }
        }
        // Void (or leading): the baseline already does the right thing.
        Baseline.choose_card(view)
    }
}
