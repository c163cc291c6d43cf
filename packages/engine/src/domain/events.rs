//! Events raised by the turn controller for the rendering layer.

use serde::Serialize;

use super::cards_types::Card;
use super::rules::TEAMS;
use super::state::Seat;

/// Notifications emitted in occurrence order. The engine holds no
/// reference to any display surface; a renderer drains these and reacts
/// on its own schedule. Any visual pacing happens there, never inside
/// a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    HandDealt { dealer: Seat, leader: Seat },
    CardPlayed { seat: Seat, card: Card },
    TrickResolved { winner: Seat, card: Card },
    BooksUpdated { books: [u8; TEAMS] },
    HandComplete { books: [u8; TEAMS] },
}
