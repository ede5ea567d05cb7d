//! Error codes for the Durak room server.
//!
//! Every code that reaches a client (HTTP body or websocket `error` frame)
//! is defined here. Never pass ad-hoc strings as error codes.

use core::fmt;

use serde::{Serialize, Serializer};

/// Centralized error codes.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Missing or malformed `room` query parameter
    InvalidRoomId,
    /// Inbound frame could not be understood
    BadRequest,

    // Room membership
    /// Room already seats two players
    RoomFull,
    /// Connection id is already seated in the room
    AlreadyJoined,

    // Server side
    /// Outbound frame could not be handed to a connection
    DeliveryFailed,
    /// Payload could not be encoded
    SerializationFailed,
    /// Configuration error
    ConfigError,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    /// Get the canonical string representation of this error code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRoomId => "INVALID_ROOM_ID",
            Self::BadRequest => "BAD_REQUEST",
            Self::RoomFull => "ROOM_FULL",
            Self::AlreadyJoined => "ALREADY_JOINED",
            Self::DeliveryFailed => "DELIVERY_FAILED",
            Self::SerializationFailed => "SERIALIZATION_FAILED",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
