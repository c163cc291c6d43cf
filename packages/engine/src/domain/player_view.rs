//! Read-only snapshot of the game for one seat.

use serde::Serialize;

use super::cards_types::{Card, Suit};
use super::hand::sort_for_display;
use super::rules::{PLAYERS, TEAMS};
use super::state::{GameState, Phase, Seat};

/// What a single seat is allowed to see: its own cards, the public
/// trick state, and everyone else's hand exposed as a count only.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub viewer: Seat,
    pub phase: Phase,
    pub turn: Option<Seat>,
    pub leader: Option<Seat>,
    pub spades_broken: bool,
    pub books: [u8; TEAMS],
    pub trick_plays: Vec<(Seat, Card)>,
    pub trick_lead: Option<Suit>,
    /// The viewer's cards, display-sorted.
    pub hand: Vec<Card>,
    pub hand_sizes: [u8; PLAYERS],
    pub last_trick: Option<Vec<(Seat, Card)>>,
}

impl GameSnapshot {
    pub fn for_seat(state: &GameState, viewer: Seat) -> Self {
        let mut hand = state.hands[viewer as usize].clone();
        sort_for_display(&mut hand);
        let mut hand_sizes = [0u8; PLAYERS];
        for (seat, cards) in state.hands.iter().enumerate() {
            hand_sizes[seat] = cards.len() as u8;
        }
        Self {
            viewer,
            phase: state.phase,
            turn: state.turn,
            leader: state.leader,
            spades_broken: state.spades_broken,
            books: state.books,
            trick_plays: state.trick_plays.clone(),
            trick_lead: state.trick_lead,
            hand,
            hand_sizes,
            last_trick: state.last_trick.clone(),
        }
    }
}
