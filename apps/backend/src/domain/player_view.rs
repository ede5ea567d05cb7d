//! Per-recipient projection of room state.
//!
//! A view carries the recipient's own cards but only counts for the opponent
//! hand and the draw pile. Everything else shown is public by the rules.

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::state::{ConnId, GameState};
use crate::domain::Card;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    pub player_hand: Vec<Card>,
    /// Size of the other player's hand; 0 when nobody else is seated.
    pub opponent_count: usize,
    pub field_cards: Vec<Card>,
    pub is_my_turn: bool,
    pub deck_count: usize,
    pub trump: Option<Card>,
    pub waiting_for_peer: bool,
    pub is_ready: bool,
    pub opponent_ready: bool,
    pub game_started: bool,
}

impl GameState {
    /// Build the view for `recipient`, or `None` if it holds no seat.
    pub fn view_for(&self, recipient: ConnId) -> Option<GameStateView> {
        let me = self.player(recipient)?;
        let opponent = self.opponent_of(recipient);

        Some(GameStateView {
            player_hand: me.hand.clone(),
            opponent_count: opponent.map_or(0, |p| p.hand.len()),
            field_cards: self.field().to_vec(),
            is_my_turn: self.turn() == Some(recipient),
            deck_count: self.deck().len(),
            trump: self.trump(),
            waiting_for_peer: self.players().len() < PLAYERS,
            is_ready: me.ready,
            opponent_ready: opponent.is_some_and(|p| p.ready),
            game_started: self.is_started(),
        })
    }

    /// Views for every seated player, computed from the same state.
    pub fn views(&self) -> Vec<(ConnId, GameStateView)> {
        self.players()
            .iter()
            .filter_map(|p| self.view_for(p.id).map(|view| (p.id, view)))
            .collect()
    }
}
