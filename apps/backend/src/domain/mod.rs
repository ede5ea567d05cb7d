//! Domain layer: pure game logic types and helpers.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod game_transition;
pub mod player_view;
pub mod rules;
pub mod state;

#[cfg(test)]
mod tests_props_consistency;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{create_deck, deal_from_front, shuffle, shuffle_with};
pub use game_transition::{plan_start, StartPlan};
pub use player_view::GameStateView;
pub use state::{ConnId, GameState, Phase, Player};
