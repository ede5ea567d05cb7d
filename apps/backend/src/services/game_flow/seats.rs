use tracing::{debug, info};

use super::broadcast::broadcast_game_state;
use super::GameRoom;
use crate::domain::ConnId;
use crate::error::AppError;
use crate::ws::hub::Outbound;

impl GameRoom {
    /// Seat `conn` and register its outbound link, then broadcast so everyone
    /// sees the new head count.
    ///
    /// Fails with [`AppError::RoomFull`] for a third connection and
    /// [`AppError::AlreadyJoined`] for a connection that already holds a seat.
    /// The link is dropped on failure.
    pub fn join(&self, conn: ConnId, link: Box<dyn Outbound>) -> Result<(), AppError> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        inner.game.seat(conn)?;
        inner.links.attach(conn, link);
        info!(conn_id = %conn, players = inner.game.players().len(), "player joined");

        broadcast_game_state(&inner.game, &inner.links);
        Ok(())
    }

    /// Remove `conn` and its link. A match in progress is abandoned and the
    /// remaining player is told so through a fresh snapshot.
    ///
    /// Returns `false` if `conn` held no seat.
    pub fn leave(&self, conn: ConnId) -> bool {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        inner.links.detach(conn);
        let was_started = inner.game.is_started();
        if inner.game.unseat(conn).is_none() {
            debug!(conn_id = %conn, "leave from a connection without a seat");
            return false;
        }

        if was_started {
            info!(conn_id = %conn, "player left a running game; room reset to waiting");
        } else {
            info!(conn_id = %conn, players = inner.game.players().len(), "player left");
        }

        broadcast_game_state(&inner.game, &inner.links);
        true
    }
}
