//! Turn controller: sequences plays across the four seats.
//!
//! `GameFlow` owns the game state, the per-seat play source (human
//! input or a decision policy), and the event queue consumed by the
//! rendering layer. Every transition is synchronous and instantaneous;
//! visual pacing belongs to whoever drains the events.

mod ai_coordinator;

use tracing::{debug, info, warn};

use crate::ai::PlayPolicy;
use crate::domain::dealing::deal_hands;
use crate::domain::hand::legal_plays;
use crate::domain::rules::{PLAYERS, TEAMS};
use crate::domain::state::{hand_start_seat, require_turn, GameState, Phase, Seat};
use crate::domain::tricks::{play_card, PlayCardResult};
use crate::domain::{Card, GameEvent, GameSnapshot};
use crate::errors::{DomainError, ValidationKind};

/// How a seat's plays are produced.
pub enum SeatKind {
    /// Plays arrive through [`GameFlow::submit_human_play`].
    Human,
    /// Plays are chosen by a decision policy.
    Auto(Box<dyn PlayPolicy>),
}

impl SeatKind {
    fn is_human(&self) -> bool {
        matches!(self, SeatKind::Human)
    }
}

/// The turn state machine for one table.
pub struct GameFlow {
    state: GameState,
    seats: [SeatKind; PLAYERS],
    dealer: Seat,
    events: Vec<GameEvent>,
}

impl GameFlow {
    pub fn new(seats: [SeatKind; PLAYERS]) -> Self {
        Self {
            state: GameState::new(),
            seats,
            dealer: 0,
            events: Vec::new(),
        }
    }

    /// Start a fresh hand: seeded deal, books zeroed, spades unbroken,
    /// the seat left of the dealer leading. Automated seats play on
    /// immediately, up to the first human seat (or the end of the hand
    /// at an all-auto table).
    pub fn deal(&mut self, dealer: Seat, seed: u64) -> Result<(), DomainError> {
        let hands = deal_hands(seed)?;
        let leader = hand_start_seat(dealer);
        self.dealer = dealer;
        self.state = GameState {
            phase: Phase::Trick { trick_no: 1 },
            hands,
            turn: Some(leader),
            leader: Some(leader),
            ..GameState::new()
        };
        info!(dealer, leader, seed, "hand dealt");
        self.events.push(GameEvent::HandDealt { dealer, leader });
        self.run_auto_plays()
    }

    // --- read-only queries ---

    pub fn current_seat(&self) -> Option<Seat> {
        self.state.turn
    }

    /// Admissible cards for the seat to act, in hand order.
    pub fn legal_plays_for_current_seat(&self) -> Result<Vec<Card>, DomainError> {
        let turn = require_turn(&self.state, "legal_plays_for_current_seat")?;
        let legal = legal_plays(
            &self.state.hands[turn as usize],
            self.state.trick_lead,
            self.state.spades_broken,
        );
        if legal.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::NoLegalPlay,
                format!("Seat {turn} has no legal play"),
            ));
        }
        Ok(legal)
    }

    pub fn is_spades_broken(&self) -> bool {
        self.state.spades_broken
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    /// Books taken so far, per team.
    pub fn book_counts(&self) -> [u8; TEAMS] {
        self.state.books
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// One seat's visible view, for the rendering layer.
    pub fn snapshot(&self, viewer: Seat) -> GameSnapshot {
        GameSnapshot::for_seat(&self.state, viewer)
    }

    /// Hand over the accumulated events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // --- transitions ---

    /// Accept a play from the human seat currently to act, then let the
    /// automated seats that follow take their turns.
    pub fn submit_human_play(&mut self, card: Card) -> Result<(), DomainError> {
        let turn = require_turn(&self.state, "submit_human_play")?;
        if !self.seats[turn as usize].is_human() {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!("Seat {turn} is not a human seat"),
            ));
        }
        self.apply_play(turn, card)?;
        self.run_auto_plays()
    }

    /// One accepted play plus its bookkeeping and events.
    fn apply_play(&mut self, seat: Seat, card: Card) -> Result<PlayCardResult, DomainError> {
        let result = match play_card(&mut self.state, seat, card) {
            Ok(result) => result,
            Err(e) => {
                warn!(seat, ?card, error = %e, "play rejected");
                return Err(e);
            }
        };
        debug!(seat, ?card, "card played");
        self.events.push(GameEvent::CardPlayed { seat, card });

        if result.trick_completed {
            if let (Some(winner), Some(winning_card)) = (result.trick_winner, result.winning_card)
            {
                info!(winner, ?winning_card, books = ?self.state.books, "trick resolved");
                self.events.push(GameEvent::TrickResolved {
                    winner,
                    card: winning_card,
                });
                self.events.push(GameEvent::BooksUpdated {
                    books: self.state.books,
                });
            }
            if result.phase_transitioned == Some(Phase::HandComplete) {
                info!(books = ?self.state.books, "hand complete");
                self.events.push(GameEvent::HandComplete {
                    books: self.state.books,
                });
            }
        }
        Ok(result)
    }
}
