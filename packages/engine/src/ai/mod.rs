//! Decision policies for automated seats.
//!
//! This module provides:
//! - the [`PlayPolicy`] trait and the [`PlayView`] handed to it
//! - [`Baseline`]: conserve strength, shed the cheapest legal card
//! - [`PartnerAware`]: reads the partner's play before committing
//! - [`Random`]: uniform legal play (seedable for tests)

mod baseline;
mod partner_aware;
mod random;
mod trait_def;

pub use baseline::Baseline;
pub use partner_aware::PartnerAware;
pub use random::Random;
pub use trait_def::{PlayPolicy, PlayView, PolicyError};

/// Selectable policy implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Baseline,
    PartnerAware,
    Random,
}

/// Instantiate a policy. `seed` only affects [`Random`].
pub fn create_policy(kind: PolicyKind, seed: Option<u64>) -> Box<dyn PlayPolicy> {
    match kind {
        PolicyKind::Baseline => Box::new(Baseline),
        PolicyKind::PartnerAware => Box::new(PartnerAware),
        PolicyKind::Random => Box::new(Random::new(seed)),
    }
}
