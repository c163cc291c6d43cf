//! Decision-policy trait definition.

use std::fmt;

use crate::domain::state::Seat;
use crate::domain::Card;

/// Errors surfaced by a decision policy.
#[derive(Debug)]
pub enum PolicyError {
    /// The policy was invoked without a usable choice (empty legal set).
    InvalidMove(String),
    /// The policy encountered an internal error.
    Internal(String),
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::InvalidMove(msg) => write!(f, "policy invalid move: {msg}"),
            PolicyError::Internal(msg) => write!(f, "policy internal error: {msg}"),
        }
    }
}

impl std::error::Error for PolicyError {}

/// What an automated seat sees when asked to play: its legal options
/// and the public trick state. Policies never see other hands.
#[derive(Debug, Clone, Copy)]
pub struct PlayView<'a> {
    /// Seat being asked to act.
    pub seat: Seat,
    /// Admissible cards, in hand order. Never empty when the controller
    /// honors its contract.
    pub legal_plays: &'a [Card],
    /// Cards already played into the current trick, in play order.
    pub trick_plays: &'a [(Seat, Card)],
    /// The first card of the trick, absent when this seat leads.
    pub leading_card: Option<Card>,
    pub spades_broken: bool,
}

/// Card-selection strategy for an automated seat.
///
/// Implementations must return a member of `view.legal_plays`; the
/// controller treats anything else as a fatal contract violation. The
/// chosen card is removed from the seat's hand by the controller, never
/// by the policy.
pub trait PlayPolicy: Send + Sync {
    fn choose_card(&self, view: &PlayView<'_>) -> Result<Card, PolicyError>;
}
