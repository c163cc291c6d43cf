//! Trick resolution and the play-card transition.

use crate::domain::cards_logic::card_beats;
use crate::domain::cards_types::{Card, Suit};
use crate::domain::hand::legal_plays;
use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::state::{
    next_seat, require_trick_phase, require_turn, team_of, GameState, Phase, Seat,
};
use crate::errors::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether a trick was completed (4 cards played).
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// The card that took the completed trick.
    pub winning_card: Option<Card>,
    /// Trick number after this play (incremented on completion).
    pub trick_no_after: u8,
    /// Phase transitioned to, if any (None means still in trick play).
    pub phase_transitioned: Option<Phase>,
}

/// Resolve a completed trick to the winning (seat, card).
///
/// Returns None unless exactly four cards are down. Priority order per
/// [`card_beats`]: jokers (BigJoker over ExtraJoker), then the highest
/// spade, then the highest card of the leading suit. Ties cannot occur:
/// every card in play is unique.
pub fn resolve_trick(plays: &[(Seat, Card)]) -> Option<(Seat, Card)> {
    if plays.len() < PLAYERS {
        return None;
    }
    let lead = plays[0].1.suit;
    let mut best = plays[0];
    for &play in &plays[1..] {
        if card_beats(play.1, best.1, lead) {
            best = play;
        }
    }
    Some(best)
}

/// Play a card into the current trick, enforcing phase, turn, and
/// legality. On the fourth card the trick is resolved, the winning
/// team's books are incremented, and the winner becomes leader of the
/// next trick.
pub fn play_card(
    state: &mut GameState,
    seat: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    let trick_no = require_trick_phase(state, "play_card")?;

    let turn = require_turn(state, "play_card")?;
    if turn != seat {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Out of turn",
        ));
    }

    let hand = &state.hands[seat as usize];
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            "Card not in hand",
        ));
    };

    let legal = legal_plays(hand, state.trick_lead, state.spades_broken);
    if !legal.contains(&card) {
        return Err(illegal_play_error(
            card,
            state.trick_lead,
            state.spades_broken,
        ));
    }

    // First play establishes lead suit and trick leader.
    if state.trick_plays.is_empty() {
        state.trick_lead = Some(card.suit);
        state.leader = Some(seat);
    }

    let removed = state.hands[seat as usize].remove(pos);
    state.trick_plays.push((seat, removed));
    if removed.suit == Suit::Spades {
        state.spades_broken = true;
    }
    state.turn = Some(next_seat(seat));

    let trick_completed = state.trick_plays.len() == PLAYERS;
    let mut result = PlayCardResult {
        trick_completed,
        trick_winner: None,
        winning_card: None,
        trick_no_after: trick_no,
        phase_transitioned: None,
    };

    if !trick_completed {
        return Ok(result);
    }

    let Some((winner, winning_card)) = resolve_trick(&state.trick_plays) else {
        return Err(DomainError::invariant("completed trick failed to resolve"));
    };
    state.books[team_of(winner) as usize] += 1;
    state.leader = Some(winner);
    state.turn = Some(winner);
    result.trick_winner = Some(winner);
    result.winning_card = Some(winning_card);

    state.last_trick = Some(std::mem::take(&mut state.trick_plays));
    state.trick_lead = None;

    let next_trick_no = trick_no.saturating_add(1);
    result.trick_no_after = next_trick_no;

    if usize::from(next_trick_no) > HAND_SIZE {
        state.phase = Phase::HandComplete;
        state.turn = None;
        state.leader = None;
        result.phase_transitioned = Some(Phase::HandComplete);
        return Ok(result);
    }

    state.phase = Phase::Trick {
        trick_no: next_trick_no,
    };
    Ok(result)
}

fn illegal_play_error(card: Card, leading_suit: Option<Suit>, spades_broken: bool) -> DomainError {
    if leading_suit.is_none() && card.suit == Suit::Spades && !spades_broken {
        DomainError::validation(
            ValidationKind::SpadesNotBroken,
            "Cannot lead spades until they are broken",
        )
    } else {
        DomainError::validation(ValidationKind::MustFollowSuit, "Must follow suit")
    }
}
