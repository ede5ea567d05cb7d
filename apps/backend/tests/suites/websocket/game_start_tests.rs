// Ready handshake over real sockets

use std::time::Duration;

use durak_backend::AppState;

use crate::support::websocket::{start_test_server, ws_url};
use crate::support::websocket_client::WebSocketClient;

#[tokio::test]
async fn two_ready_clients_get_dealt_hands() -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::for_tests();
    let (server, addr, join) = start_test_server(state).await?;
    let url = ws_url(addr, "table-1");

    let mut a = WebSocketClient::connect_retry(&url, Duration::from_secs(2)).await?;
    a.recv_view_until(|v| v.waiting_for_peer).await?;
    let mut b = WebSocketClient::connect_retry(&url, Duration::from_secs(2)).await?;
    b.recv_view_until(|v| !v.waiting_for_peer).await?;
    a.recv_view_until(|v| !v.waiting_for_peer).await?;

    a.send_ready().await?;
    let seen_by_b = b.recv_view_until(|v| v.opponent_ready).await?;
    assert!(!seen_by_b.game_started);

    b.send_ready().await?;
    let va = a.recv_view_until(|v| v.game_started).await?;
    let vb = b.recv_view_until(|v| v.game_started).await?;

    for view in [&va, &vb] {
        assert_eq!(view.player_hand.len(), 6);
        assert_eq!(view.opponent_count, 6);
        assert_eq!(view.deck_count, 24);
        assert!(view.trump.is_some());
        assert!(view.is_ready && view.opponent_ready);
    }
    assert_eq!(va.trump, vb.trump);
    assert!(va.is_my_turn ^ vb.is_my_turn);
    assert!(va.player_hand.iter().all(|c| !vb.player_hand.contains(c)));

    // Dropping one player abandons the match for the other.
    b.close().await?;
    let reset = a.recv_view_until(|v| v.waiting_for_peer).await?;
    assert!(!reset.game_started);
    assert!(reset.player_hand.is_empty());

    a.close().await?;
    server.stop(true).await;
    join.await??;
    Ok(())
}
