//! Side table from connection identity to its outbound link.
//!
//! Room state is keyed by [`ConnId`] only; the transport handle for each id
//! lives here so the state machine never depends on socket lifetimes.

use std::collections::HashMap;

use tokio::sync::mpsc::UnboundedSender;

use crate::domain::ConnId;
use crate::error::AppError;
use crate::ws::protocol::ServerMsg;

/// Per-connection send primitive.
///
/// Must not block: implementations hand the frame to a mailbox or channel and
/// report whether the other end is still there.
pub trait Outbound: Send + Sync {
    fn deliver(&self, frame: String) -> Result<(), AppError>;
}

impl Outbound for UnboundedSender<String> {
    fn deliver(&self, frame: String) -> Result<(), AppError> {
        self.send(frame)
            .map_err(|_| AppError::delivery("connection channel closed"))
    }
}

#[derive(Default)]
pub struct ConnectionHub {
    links: HashMap<ConnId, Box<dyn Outbound>>,
}

impl ConnectionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the link for `id`, replacing any previous one.
    pub fn attach(&mut self, id: ConnId, link: Box<dyn Outbound>) {
        self.links.insert(id, link);
    }

    pub fn detach(&mut self, id: ConnId) -> bool {
        self.links.remove(&id).is_some()
    }

    pub fn contains(&self, id: ConnId) -> bool {
        self.links.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Serialize `msg` and hand it to `id`'s link.
    pub fn send(&self, id: ConnId, msg: &ServerMsg) -> Result<(), AppError> {
        let link = self
            .links
            .get(&id)
            .ok_or_else(|| AppError::delivery(format!("no link for connection {id}")))?;
        let frame = serde_json::to_string(msg)?;
        link.deliver(frame)
    }
}
