use std::fmt;

use uuid::Uuid;

use crate::domain::game_transition::StartPlan;
use crate::domain::rules::PLAYERS;
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Opaque per-connection identity, issued when a socket is accepted.
///
/// Stable for the lifetime of the connection and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConnId(Uuid);

impl ConnId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Room progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Fewer than two players, or not everyone is ready.
    Waiting,
    /// Two players, both ready, cards not dealt yet.
    Ready,
    /// Trump fixed, hands dealt, someone holds the turn.
    Started,
}

/// One seated participant. Readiness lives only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: ConnId,
    pub hand: Vec<Card>,
    pub ready: bool,
}

impl Player {
    pub fn new(id: ConnId) -> Self {
        Self {
            id,
            hand: Vec::new(),
            ready: false,
        }
    }
}

/// Authoritative state of a single room, sufficient for pure domain operations.
///
/// Holds no transport handles and no lock; the coordinator wraps it.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    /// Seated players in join order (at most two).
    players: Vec<Player>,
    /// Cards laid down in the current trick.
    field: Vec<Card>,
    /// Draw pile; index 0 is the top.
    deck: Vec<Card>,
    /// Face-up trump indicator, also the bottom card of `deck`.
    trump: Option<Card>,
    /// Connection whose turn it is.
    turn: Option<ConnId>,
    started: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.started {
            Phase::Started
        } else if self.all_ready() {
            Phase::Ready
        } else {
            Phase::Waiting
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: ConnId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Seat order, used when picking who moves first.
    pub fn player_ids(&self) -> Vec<ConnId> {
        self.players.iter().map(|p| p.id).collect()
    }

    /// The other seated player, if any.
    pub fn opponent_of(&self, id: ConnId) -> Option<&Player> {
        self.players.iter().find(|p| p.id != id)
    }

    pub fn field(&self) -> &[Card] {
        &self.field
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn trump(&self) -> Option<Card> {
        self.trump
    }

    pub fn turn(&self) -> Option<ConnId> {
        self.turn
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= PLAYERS
    }

    /// Two players seated and every one of them ready.
    pub fn all_ready(&self) -> bool {
        self.players.len() == PLAYERS && self.players.iter().all(|p| p.ready)
    }

    /// The ready -> started transition may fire.
    pub fn can_start(&self) -> bool {
        !self.started && self.all_ready()
    }

    pub fn ready_count(&self) -> usize {
        self.players.iter().filter(|p| p.ready).count()
    }

    pub fn seat(&mut self, id: ConnId) -> Result<(), DomainError> {
        if self.player(id).is_some() {
            return Err(DomainError::AlreadySeated);
        }
        if self.is_full() {
            return Err(DomainError::RoomFull);
        }
        self.players.push(Player::new(id));
        Ok(())
    }

    /// Remove a player. A started match cannot continue one-handed, so the
    /// room drops back to `Waiting` with everything dealt returned.
    pub fn unseat(&mut self, id: ConnId) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.id == id)?;
        let removed = self.players.remove(idx);
        if self.started {
            self.abandon();
        }
        Some(removed)
    }

    /// Returns `false` when `id` holds no seat.
    pub fn mark_ready(&mut self, id: ConnId) -> bool {
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(player) => {
                player.ready = true;
                true
            }
            None => false,
        }
    }

    /// Install a dealt match computed by `plan_start`.
    pub fn apply_start(&mut self, plan: StartPlan) -> Result<(), DomainError> {
        if self.started {
            return Err(DomainError::AlreadyStarted);
        }
        let seated_match = plan.hands.len() == self.players.len()
            && plan.hands.iter().all(|(id, _)| self.player(*id).is_some());
        if !seated_match || self.player(plan.turn).is_none() {
            return Err(DomainError::InvalidPlayerCount {
                expected: PLAYERS,
                actual: self.players.len(),
            });
        }

        self.started = true;
        self.field.clear();
        self.deck = plan.deck;
        self.trump = Some(plan.trump);
        for (id, hand) in plan.hands {
            if let Some(player) = self.players.iter_mut().find(|p| p.id == id) {
                player.hand = hand;
            }
        }
        self.turn = Some(plan.turn);
        Ok(())
    }

    /// Every card currently in play: deck, hands and field.
    ///
    /// The trump is the bottom card of the deck, so it is counted once.
    pub fn card_census(&self) -> Vec<Card> {
        let mut cards = self.deck.clone();
        for player in &self.players {
            cards.extend(player.hand.iter().copied());
        }
        cards.extend(self.field.iter().copied());
        cards
    }

    fn abandon(&mut self) {
        self.started = false;
        self.field.clear();
        self.deck.clear();
        self.trump = None;
        self.turn = None;
        for player in &mut self.players {
            player.hand.clear();
            player.ready = false;
        }
    }
}
