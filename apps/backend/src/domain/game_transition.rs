//! The ready -> started transition, computed without touching room state.
//!
//! `plan_start` does all the shuffling and dealing on owned values; the
//! coordinator then installs the result with `GameState::apply_start` inside
//! the same lock acquisition that observed both players ready.

use rand::Rng;

use crate::domain::dealing::{create_deck, deal_from_front, shuffle_with};
use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::state::ConnId;
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// A freshly dealt match, ready to be applied to a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartPlan {
    /// Remaining draw pile, top first. Its last card is `trump`.
    pub deck: Vec<Card>,
    pub trump: Card,
    /// Dealt hands in seat order.
    pub hands: Vec<(ConnId, Vec<Card>)>,
    /// Player who moves first.
    pub turn: ConnId,
}

pub fn plan_start<R: Rng + ?Sized>(seats: &[ConnId], rng: &mut R) -> Result<StartPlan, DomainError> {
    if seats.len() != PLAYERS {
        return Err(DomainError::InvalidPlayerCount {
            expected: PLAYERS,
            actual: seats.len(),
        });
    }

    let mut deck = create_deck();
    shuffle_with(&mut deck, rng);

    // The trump stays in the deck as its bottom card.
    let trump = deck.last().copied().ok_or(DomainError::EmptyDeck)?;

    let hands = seats
        .iter()
        .map(|&id| {
            let mut hand = Vec::with_capacity(HAND_SIZE);
            deal_from_front(&mut deck, &mut hand, HAND_SIZE);
            (id, hand)
        })
        .collect();

    let turn = seats[rng.random_range(0..seats.len())];

    Ok(StartPlan {
        deck,
        trump,
        hands,
        turn,
    })
}
