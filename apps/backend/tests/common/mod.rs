#![allow(dead_code)]

// tests/common/mod.rs
use durak_backend::{ConnId, GameStateView, ServerMsg};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

// Logging is auto-installed for every test binary that pulls in `common`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// A connection whose outbound frames land in a channel the test can read.
pub struct RecordingConn {
    pub id: ConnId,
    pub rx: UnboundedReceiver<String>,
    tx: Option<UnboundedSender<String>>,
}

impl RecordingConn {
    pub fn new() -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            id: ConnId::new(),
            rx,
            tx: Some(tx),
        }
    }

    /// Sender to hand to `GameRoom::join`. Can be taken once.
    pub fn link(&mut self) -> Box<UnboundedSender<String>> {
        Box::new(self.tx.take().expect("link already taken"))
    }

    /// Every frame queued so far, decoded.
    pub fn drain(&mut self) -> Vec<ServerMsg> {
        let mut out = Vec::new();
        while let Ok(frame) = self.rx.try_recv() {
            let msg: ServerMsg = serde_json::from_str(&frame)
                .unwrap_or_else(|e| panic!("undecodable frame {frame}: {e}"));
            out.push(msg);
        }
        out
    }

    /// Game state snapshots queued so far, in delivery order.
    pub fn drain_views(&mut self) -> Vec<GameStateView> {
        self.drain()
            .into_iter()
            .filter_map(|msg| match msg {
                ServerMsg::GameState(view) => Some(view),
                ServerMsg::Error(_) => None,
            })
            .collect()
    }

    /// The most recent snapshot, discarding older ones.
    pub fn last_view(&mut self) -> GameStateView {
        self.drain_views()
            .pop()
            .expect("expected at least one gameState frame")
    }

    /// Simulate a dead socket: later sends to this connection fail.
    pub fn disconnect(&mut self) {
        self.rx.close();
        while self.rx.try_recv().is_ok() {}
    }
}

impl Default for RecordingConn {
    fn default() -> Self {
        Self::new()
    }
}
