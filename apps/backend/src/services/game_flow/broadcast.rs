use tracing::{debug, warn};

use crate::domain::GameState;
use crate::ws::hub::ConnectionHub;
use crate::ws::protocol::ServerMsg;

/// Send every seated player its own view. A failed send is logged and
/// skipped; the other players are still served and room state is untouched.
///
/// Returns how many snapshots were handed off.
pub(super) fn broadcast_game_state(game: &GameState, links: &ConnectionHub) -> usize {
    let mut delivered = 0;
    for (recipient, view) in game.views() {
        match links.send(recipient, &ServerMsg::GameState(view)) {
            Ok(()) => delivered += 1,
            Err(err) => warn!(
                conn_id = %recipient,
                error = %err,
                "failed to deliver game state"
            ),
        }
    }
    debug!(delivered, seated = game.players().len(), "broadcast game state");
    delivered
}
