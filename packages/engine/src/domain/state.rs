//! Turn/trick state container and seat math.

use serde::Serialize;

use crate::domain::cards_types::{Card, Suit};
use crate::domain::rules::{PLAYERS, TEAMS};
use crate::errors::{DomainError, ValidationKind};

pub type Seat = u8; // 0..=3
pub type TeamId = u8; // 0..=1

/// Hand progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Phase {
    /// No hand dealt yet.
    Init,
    /// Trick play; `trick_no` is 1-based.
    Trick { trick_no: u8 },
    /// All thirteen tricks resolved.
    HandComplete,
}

/// Entire per-hand state, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    /// Players' hands.
    pub hands: [Vec<Card>; PLAYERS],
    /// Seat expected to act; None when nobody can (Init, HandComplete).
    pub turn: Option<Seat>,
    /// Seat that led the current trick (set by the first play).
    pub leader: Option<Seat>,
    /// Ordered plays of the current trick (who, card).
    pub trick_plays: Vec<(Seat, Card)>,
    /// Suit of the first card in the current trick.
    pub trick_lead: Option<Suit>,
    /// Whether any spade has entered a trick this hand. Persists across
    /// tricks; reset only by a fresh deal.
    pub spades_broken: bool,
    /// Books per team.
    pub books: [u8; TEAMS],
    /// Last completed trick, for display.
    pub last_trick: Option<Vec<(Seat, Card)>>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Init,
            hands: Default::default(),
            turn: None,
            leader: None,
            trick_plays: Vec::with_capacity(PLAYERS),
            trick_lead: None,
            spades_broken: false,
            books: [0; TEAMS],
            last_trick: None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: Seat, n: u8) -> Seat {
    seat_offset(start, n as i8)
}

/// A seat's partner sits directly across.
#[inline]
pub fn partner_of(seat: Seat) -> Seat {
    seat_offset(seat, 2)
}

/// Teams partition the seats by parity: {0, 2} vs {1, 3}.
#[inline]
pub fn team_of(seat: Seat) -> TeamId {
    seat % 2
}

/// Hand-start seat (player to the left of the dealer).
#[inline]
pub fn hand_start_seat(dealer: Seat) -> Seat {
    next_seat(dealer)
}

/// Expected actor seat during a trick.
///
/// `leader` led the trick; `play_count` is how many cards have already
/// been played into it.
#[inline]
pub fn expected_actor(leader: Seat, play_count: u8) -> Seat {
    nth_from(leader, play_count)
}

pub fn require_turn(state: &GameState, ctx: &'static str) -> Result<Seat, DomainError> {
    state.turn.ok_or_else(|| {
        DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("No seat to act ({ctx})"),
        )
    })
}

pub fn require_trick_phase(state: &GameState, ctx: &'static str) -> Result<u8, DomainError> {
    match state.phase {
        Phase::Trick { trick_no } => Ok(trick_no),
        _ => Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Not in trick play ({ctx})"),
        )),
    }
}
