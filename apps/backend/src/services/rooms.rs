//! Directory of live rooms keyed by the id the client asked for.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::info;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::domain::ConnId;
use crate::services::game_flow::GameRoom;
use crate::ws::hub::Outbound;

pub const MAX_ROOM_ID_LEN: usize = 64;

/// Room ids are 1..=64 characters of `[A-Za-z0-9_-]`.
pub fn validate_room_id(room_id: &str) -> Result<(), AppError> {
    if room_id.is_empty() || room_id.len() > MAX_ROOM_ID_LEN {
        return Err(AppError::bad_request(
            ErrorCode::InvalidRoomId,
            format!("room id must be 1 to {MAX_ROOM_ID_LEN} characters"),
        ));
    }
    if !room_id
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    {
        return Err(AppError::bad_request(
            ErrorCode::InvalidRoomId,
            "room id may only contain letters, digits, '_' and '-'",
        ));
    }
    Ok(())
}

#[derive(Default)]
pub struct RoomDirectory {
    rooms: DashMap<String, Arc<GameRoom>>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Existing room for `room_id`, or a new empty one.
    pub fn open(&self, room_id: &str) -> Result<Arc<GameRoom>, AppError> {
        validate_room_id(room_id)?;
        let room = self
            .rooms
            .entry(room_id.to_string())
            .or_insert_with(|| {
                info!(room_id, "room created");
                Arc::new(GameRoom::new())
            })
            .clone();
        Ok(room)
    }

    /// Seat `conn` in `room_id`, creating the room if needed.
    ///
    /// Runs under the directory entry lock so a concurrent
    /// [`release_if_empty`](Self::release_if_empty) cannot drop the room
    /// between lookup and join.
    pub fn join(
        &self,
        room_id: &str,
        conn: ConnId,
        link: Box<dyn Outbound>,
    ) -> Result<Arc<GameRoom>, AppError> {
        validate_room_id(room_id)?;
        let entry = self.rooms.entry(room_id.to_string()).or_insert_with(|| {
            info!(room_id, "room created");
            Arc::new(GameRoom::new())
        });
        entry.join(conn, link)?;
        Ok(Arc::clone(entry.value()))
    }

    pub fn get(&self, room_id: &str) -> Option<Arc<GameRoom>> {
        self.rooms.get(room_id).map(|entry| Arc::clone(entry.value()))
    }

    /// Drop the room once nobody is seated. Returns whether it was removed.
    pub fn release_if_empty(&self, room_id: &str) -> bool {
        let removed = self
            .rooms
            .remove_if(room_id, |_, room| room.is_empty())
            .is_some();
        if removed {
            info!(room_id, "room released");
        }
        removed
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
