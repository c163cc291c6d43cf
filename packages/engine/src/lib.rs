//! Rule engine for a four-player partnership Spades variant played with
//! two jokers.
//!
//! The crate is split the same way the rules are: [`domain`] holds the
//! pure game logic (cards, dealing, legality, trick resolution, state),
//! [`ai`] the decision policies for automated seats, and [`game_flow`]
//! the turn controller that sequences plays and raises events for a
//! rendering layer. The engine performs no I/O of its own.

pub mod ai;
pub mod domain;
pub mod errors;
pub mod game_flow;
