//! Domain-level error type for pure game logic.
//!
//! Transport- and HTTP-agnostic. Services convert it into
//! `crate::error::AppError` via the `From` impl there.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A card, suit or rank token could not be parsed.
    #[error("parse card: {0}")]
    ParseCard(String),
    /// Dealing requires exactly two seated players.
    #[error("invalid player count: expected {expected}, got {actual}")]
    InvalidPlayerCount { expected: usize, actual: usize },
    /// The room has already dealt this match.
    #[error("game already started")]
    AlreadyStarted,
    /// Both seats are occupied.
    #[error("room is full")]
    RoomFull,
    /// The connection already holds a seat.
    #[error("connection already seated")]
    AlreadySeated,
    /// A deck was needed but had no cards.
    #[error("deck is empty")]
    EmptyDeck,
}

impl DomainError {
    pub fn parse_card(detail: impl Into<String>) -> Self {
        Self::ParseCard(detail.into())
    }
}
