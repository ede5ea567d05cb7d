//! Wire protocol between the browser client and a room.
//!
//! Every frame is a JSON envelope `{ "type": ..., "payload": ... }`. Inbound
//! frames are decoded in two steps: first into a loose [`Envelope`], then into
//! the closed [`ClientMsg`] enum, so an unfamiliar `type` is reported instead
//! of failing somewhere inside serde.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::GameStateView;
use crate::errors::ErrorCode;

/// Inbound message kinds this server acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientMsg {
    Ready,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("malformed frame: {0}")]
    Malformed(String),
    #[error("unsupported message type: {0}")]
    UnsupportedType(String),
}

impl TryFrom<Envelope> for ClientMsg {
    type Error = ProtocolError;

    fn try_from(envelope: Envelope) -> Result<Self, Self::Error> {
        match envelope.kind.as_str() {
            "ready" => Ok(ClientMsg::Ready),
            _ => Err(ProtocolError::UnsupportedType(envelope.kind)),
        }
    }
}

/// Decode one inbound text frame.
pub fn parse_client_msg(text: &str) -> Result<ClientMsg, ProtocolError> {
    let envelope: Envelope =
        serde_json::from_str(text).map_err(|err| ProtocolError::Malformed(err.to_string()))?;
    ClientMsg::try_from(envelope)
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ServerMsg {
    GameState(GameStateView),
    Error(ErrorPayload),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
}

impl ServerMsg {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        ServerMsg::Error(ErrorPayload {
            code: code.as_str().to_string(),
            message: message.into(),
        })
    }
}
