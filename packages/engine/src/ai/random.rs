//! Random policy - uniform choice among legal plays.
//!
//! The reference policy implementation: always legal, seedable for
//! deterministic tests, and the control arm when evaluating the
//! deterministic policies in the simulator.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{PlayPolicy, PlayView, PolicyError};
use crate::domain::Card;

/// Chooses uniformly at random from the offered legal plays.
pub struct Random {
    /// RNG behind a `Mutex`: trait methods take `&self` and the policy
    /// must stay `Send + Sync`.
    rng: Mutex<StdRng>,
}

impl Random {
    pub const NAME: &'static str = "random";

    /// `Some(seed)` gives reproducible behavior for tests; `None` seeds
    /// from system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl PlayPolicy for Random {
    fn choose_card(&self, view: &PlayView<'_>) -> Result<Card, PolicyError> {
        if view.legal_plays.is_empty() {
            return Err(PolicyError::InvalidMove("No legal plays offered".into()));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| PolicyError::Internal(format!("RNG lock poisoned: {e}")))?;
        view.legal_plays
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| PolicyError::Internal("Failed to choose a random card".into()))
    }
}
