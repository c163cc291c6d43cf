//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod events;
pub mod hand;
pub mod player_view;
pub mod rules;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_props_legality;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal_hands, Deck};
pub use events::GameEvent;
pub use hand::{legal_plays, remove_card, sort_for_display};
pub use player_view::GameSnapshot;
pub use rules::is_card_legal;
pub use state::{next_seat, partner_of, team_of, GameState, Phase, Seat, TeamId};
pub use tricks::{play_card, resolve_trick, PlayCardResult};
