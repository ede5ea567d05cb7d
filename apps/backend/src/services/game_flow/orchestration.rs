use tracing::{debug, error, info, warn};

use super::broadcast::broadcast_game_state;
use super::{GameRoom, RoomInner};
use crate::domain::{plan_start, ConnId};
use crate::ws::protocol::ClientMsg;

impl GameRoom {
    /// Single entry point for inbound events from a seated connection.
    pub fn handle_message(&self, sender: ConnId, msg: ClientMsg) {
        let mut guard = self.inner.lock();
        match msg {
            ClientMsg::Ready => guard.on_ready(sender),
        }
    }
}

impl RoomInner {
    fn on_ready(&mut self, sender: ConnId) {
        if !self.game.mark_ready(sender) {
            warn!(conn_id = %sender, "ready from a connection without a seat; ignoring");
            return;
        }

        // Repeated ready on a running game changes nothing but still rebroadcasts.
        if self.game.is_started() {
            debug!(conn_id = %sender, "ready after start; rebroadcasting snapshot");
            broadcast_game_state(&self.game, &self.links);
            return;
        }

        debug!(
            conn_id = %sender,
            ready = self.game.ready_count(),
            players = self.game.players().len(),
            "player ready"
        );
        // Readiness goes out before any deal so both sides see it either way.
        broadcast_game_state(&self.game, &self.links);

        if self.game.can_start() {
            self.start_game();
        }
    }

    /// Deal a fresh match. Callers check `can_start` first, so any error
    /// here is a coordinator bug and the room stays as it was.
    fn start_game(&mut self) {
        let seats = self.game.player_ids();
        let plan = match plan_start(&seats, &mut self.rng) {
            Ok(plan) => plan,
            Err(err) => {
                error!(error = %err, "failed to plan game start");
                return;
            }
        };

        let trump = plan.trump;
        let first = plan.turn;
        if let Err(err) = self.game.apply_start(plan) {
            error!(error = %err, "failed to apply game start");
            return;
        }

        info!(
            trump = %trump,
            first_turn = %first,
            deck = self.game.deck().len(),
            "game started"
        );
        broadcast_game_state(&self.game, &self.links);
    }
}
