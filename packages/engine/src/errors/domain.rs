//! Domain-level error type used across the engine.
//!
//! The engine is display- and I/O-agnostic: host applications embed
//! [`DomainError`] into their own error types at the boundary.

use thiserror::Error;

/// Discriminants for recoverable rule and validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Unknown rank token at the textual boundary.
    InvalidRank,
    /// Unknown suit token, or a joker paired with a non-spade suit.
    InvalidSuit,
    /// Malformed card token (wrong length, empty, etc).
    ParseCard,
    /// A deal requested more cards than the deck holds.
    InsufficientCards,
    /// Spade led before spades were broken.
    SpadesNotBroken,
    /// Off-suit play while holding the leading suit (a renege).
    MustFollowSuit,
    /// Play submitted for a seat that is not to act.
    OutOfTurn,
    /// Play submitted with a card the seat does not hold.
    CardNotInHand,
    /// A seat to act presented an empty legal-play set.
    NoLegalPlay,
    /// Operation not valid in the current phase.
    PhaseMismatch,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or game-rule violation; the caller may retry.
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Broken engine invariant or decision-policy contract. Not
    /// recoverable; indicates a defect, never a game condition.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// Whether the caller may recover by retrying with different input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DomainError::Validation(..))
    }

    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Invariant(_) => None,
        }
    }
}
