//! Deck construction, shuffling and dealing from the top of the pile.
//!
//! The front of a deck `Vec` is its top: cards are dealt and drawn from
//! index 0, while the last card is the one left face up as trump.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::rules::DECK_SIZE;
use crate::domain::{Card, Rank, Suit};

/// The canonical 36-card deck in suit-major order, unshuffled.
pub fn create_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Uniform in-place shuffle seeded from the OS on each thread.
pub fn shuffle(deck: &mut [Card]) {
    shuffle_with(deck, &mut rand::rng());
}

/// Fisher-Yates shuffle driven by the caller's generator.
pub fn shuffle_with<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// Move up to `count` cards from the top of `deck` into `hand`.
///
/// Returns how many cards moved. An exhausted deck simply stops the deal.
pub fn deal_from_front(deck: &mut Vec<Card>, hand: &mut Vec<Card>, count: usize) -> usize {
    let take = count.min(deck.len());
    hand.extend(deck.drain(..take));
    take
}
