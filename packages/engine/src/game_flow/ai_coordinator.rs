//! Drives automated seats until human input is required.

use tracing::debug;

use crate::ai::PlayView;
use crate::domain::hand::legal_plays;
use crate::domain::state::Phase;
use crate::errors::{DomainError, ValidationKind};

use super::{GameFlow, SeatKind};

impl GameFlow {
    /// Let automated seats play, one rotation step at a time, until the
    /// seat to act is human or the hand is over.
    ///
    /// A policy returning a card outside the legal set it was offered
    /// is a defect in the policy, not a game condition: the loop aborts
    /// with an invariant error rather than substituting a legal card.
    pub fn run_auto_plays(&mut self) -> Result<(), DomainError> {
        loop {
            if !matches!(self.state.phase, Phase::Trick { .. }) {
                return Ok(());
            }
            let Some(turn) = self.state.turn else {
                return Ok(());
            };

            let chosen = match &self.seats[turn as usize] {
                SeatKind::Human => return Ok(()),
                SeatKind::Auto(policy) => {
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
                    let view = PlayView {
                        seat: turn,
                        legal_plays: &legal,
                        trick_plays: &self.state.trick_plays,
                        leading_card: self.state.trick_plays.first().map(|&(_, c)| c),
                        spades_broken: self.state.spades_broken,
                    };
                    let chosen = policy.choose_card(&view).map_err(|e| {
                        DomainError::invariant(format!("policy for seat {turn} failed: {e}"))
                    })?;
                    if !legal.contains(&chosen) {
                        return Err(DomainError::invariant(format!(
                            "policy for seat {turn} chose {chosen:?} outside its legal set"
                        )));
                    }
                    debug!(seat = turn, ?chosen, "auto seat chose");
                    chosen
                }
            };

            self.apply_play(turn, chosen)?;
        }
    }
}
