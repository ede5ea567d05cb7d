//! Card tokens: suit glyphs, rank tokens and the compact "10♥" form.

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

impl Suit {
    pub const fn glyph(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }
}

impl Rank {
    pub const fn token(self) -> &'static str {
        match self {
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.glyph() == s)
            .ok_or_else(|| DomainError::parse_card(format!("invalid suit: {s}")))
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.token() == s)
            .ok_or_else(|| DomainError::parse_card(format!("invalid rank: {s}")))
    }
}

impl FromStr for Card {
    type Err = DomainError;

    /// Parses the compact form: rank token followed by the suit glyph.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (split_at, _) = s
            .char_indices()
            .last()
            .ok_or_else(|| DomainError::parse_card("empty card token"))?;
        let (rank, suit) = s.split_at(split_at);
        Ok(Card {
            suit: suit.parse()?,
            rank: rank.parse()?,
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.token(), self.suit.glyph())
    }
}

/// Parse a list of compact tokens, failing on the first bad one.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
