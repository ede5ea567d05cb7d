//! Room coordinator: the lock-owning wrapper around one [`GameState`].
//!
//! Every public operation takes the room lock exactly once and runs to
//! completion before releasing it. Snapshots are built and handed to the
//! connection links while the lock is held; links only enqueue, so a slow
//! socket never stalls the room and each player observes updates in the
//! order they were applied.

mod broadcast;
mod orchestration;
mod seats;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::{Card, ConnId, GameState, GameStateView, Phase};
use crate::ws::hub::ConnectionHub;

pub struct GameRoom {
    inner: Mutex<RoomInner>,
}

struct RoomInner {
    game: GameState,
    links: ConnectionHub,
    rng: StdRng,
}

impl GameRoom {
    /// A room whose shuffles are seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A room with reproducible shuffles and first-turn picks.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            inner: Mutex::new(RoomInner {
                game: GameState::new(),
                links: ConnectionHub::new(),
                rng,
            }),
        }
    }

    pub fn snapshot_for(&self, conn: ConnId) -> Option<GameStateView> {
        self.inner.lock().game.view_for(conn)
    }

    pub fn player_count(&self) -> usize {
        self.inner.lock().game.players().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().game.players().is_empty()
    }

    pub fn phase(&self) -> Phase {
        self.inner.lock().game.phase()
    }

    /// Deck, hands and field as currently held by the room.
    pub fn card_census(&self) -> Vec<Card> {
        self.inner.lock().game.card_census()
    }
}

impl Default for GameRoom {
    fn default() -> Self {
        Self::new()
    }
}
