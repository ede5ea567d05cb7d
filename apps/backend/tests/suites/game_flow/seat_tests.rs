// Joining, capacity and leaving

use durak_backend::{AppError, ClientMsg, GameRoom, Phase};

use crate::common::RecordingConn;

#[test]
fn join_broadcasts_the_new_head_count() {
    let room = GameRoom::with_seed(20);
    let mut a = RecordingConn::new();
    room.join(a.id, a.link()).unwrap();
    assert!(a.last_view().waiting_for_peer);

    let mut b = RecordingConn::new();
    room.join(b.id, b.link()).unwrap();
    assert!(!a.last_view().waiting_for_peer);
    assert!(!b.last_view().waiting_for_peer);
    assert_eq!(room.player_count(), 2);
}

#[test]
fn third_connection_is_refused() {
    let room = GameRoom::with_seed(21);
    let mut a = RecordingConn::new();
    let mut b = RecordingConn::new();
    let mut c = RecordingConn::new();
    room.join(a.id, a.link()).unwrap();
    room.join(b.id, b.link()).unwrap();
    a.drain();

    let err = room.join(c.id, c.link()).unwrap_err();
    assert!(matches!(err, AppError::RoomFull));
    assert_eq!(room.player_count(), 2);
    assert!(a.drain().is_empty());
    assert!(c.drain().is_empty());
}

#[test]
fn same_connection_cannot_join_twice() {
    let room = GameRoom::with_seed(22);
    let mut a = RecordingConn::new();
    room.join(a.id, a.link()).unwrap();
    let (tx, _rx) = tokio::sync::mpsc::unbounded_channel::<String>();

    let err = room.join(a.id, Box::new(tx)).unwrap_err();
    assert!(matches!(err, AppError::AlreadyJoined));
    assert_eq!(room.player_count(), 1);
}

#[test]
fn leaving_a_started_game_resets_the_room() {
    let room = GameRoom::with_seed(23);
    let mut a = RecordingConn::new();
    let mut b = RecordingConn::new();
    room.join(a.id, a.link()).unwrap();
    room.join(b.id, b.link()).unwrap();
    room.handle_message(a.id, ClientMsg::Ready);
    room.handle_message(b.id, ClientMsg::Ready);
    a.drain();

    assert!(room.leave(b.id));

    let view = a.last_view();
    assert!(view.waiting_for_peer);
    assert!(!view.game_started);
    assert!(!view.is_ready);
    assert!(!view.is_my_turn);
    assert!(view.player_hand.is_empty());
    assert_eq!(view.deck_count, 0);
    assert_eq!(view.trump, None);
    assert_eq!(room.phase(), Phase::Waiting);
    assert!(room.card_census().is_empty());

    // A newcomer can play a fresh game.
    let mut c = RecordingConn::new();
    room.join(c.id, c.link()).unwrap();
    room.handle_message(a.id, ClientMsg::Ready);
    room.handle_message(c.id, ClientMsg::Ready);
    assert!(c.last_view().game_started);
}

#[test]
fn leaving_twice_is_harmless() {
    let room = GameRoom::with_seed(24);
    let mut a = RecordingConn::new();
    room.join(a.id, a.link()).unwrap();

    assert!(room.leave(a.id));
    assert!(!room.leave(a.id));
    assert!(room.is_empty());
}
