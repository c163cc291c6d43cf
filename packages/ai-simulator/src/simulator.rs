//! Drives complete all-auto hands through the engine.

use engine::ai::{create_policy, PolicyKind};
use engine::domain::rules::{DECK_SIZE, PLAYERS, TEAMS};
use engine::domain::state::{team_of, Seat, TeamId};
use engine::domain::{GameEvent, Phase};
use engine::errors::DomainError;
use engine::game_flow::{GameFlow, SeatKind};

/// Outcome of one simulated hand.
#[derive(Debug, Clone, Copy)]
pub struct HandOutcome {
    /// Books per team.
    pub books: [u8; TEAMS],
    /// Team that took the majority of the thirteen tricks.
    pub winning_team: TeamId,
}

/// Play one hand with four automated seats. The deal drives the whole
/// hand to completion; the outcome is a pure function of the seed and
/// the seat policies.
pub fn run_hand(
    dealer: Seat,
    seed: u64,
    kinds: [PolicyKind; PLAYERS],
) -> Result<HandOutcome, DomainError> {
    let seats = kinds.map(|kind| SeatKind::Auto(create_policy(kind, Some(seed))));
    let mut flow = GameFlow::new(seats);
    flow.deal(dealer, seed)?;

    if flow.state().phase != Phase::HandComplete {
        return Err(DomainError::invariant(
            "all-auto hand stopped before completion",
        ));
    }

    let events = flow.drain_events();
    let played = events
        .iter()
        .filter(|e| matches!(e, GameEvent::CardPlayed { .. }))
        .count();
    if played != DECK_SIZE {
        return Err(DomainError::invariant(format!(
            "hand released {played} cards instead of {DECK_SIZE}"
        )));
    }

    let books = flow.book_counts();
    // Thirteen tricks: no ties possible.
    let winning_team = if books[0] > books[1] { 0 } else { 1 };
    Ok(HandOutcome {
        books,
        winning_team,
    })
}

/// Sanity helper for reporting: which seats make up a team.
pub fn team_seats(team: TeamId) -> Vec<Seat> {
    (0..PLAYERS as Seat).filter(|&s| team_of(s) == team).collect()
}
