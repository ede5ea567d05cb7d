// WebSocket client utilities for testing

use std::time::Duration;

use durak_backend::{GameStateView, ServerMsg};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

pub const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// WebSocket test client
pub struct WebSocketClient {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WebSocketClient {
    /// Connect to a WebSocket endpoint, retrying until success or timeout.
    pub async fn connect_retry(
        url: &str,
        timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let start = tokio::time::Instant::now();
        loop {
            match connect_async(url).await {
                Ok((stream, _)) => return Ok(Self { stream }),
                Err(err) => {
                    if start.elapsed() >= timeout {
                        return Err(Box::new(err));
                    }
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
            }
        }
    }

    /// Send a text frame
    pub async fn send(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.stream.send(Message::Text(text.into())).await?;
        Ok(())
    }

    pub async fn send_ready(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.send(r#"{"type":"ready"}"#).await
    }

    /// Close the connection
    pub async fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.stream.close(None).await?;
        Ok(())
    }

    /// Next decoded server message, skipping control frames.
    ///
    /// `Ok(None)` means the server closed the socket.
    pub async fn recv_msg(&mut self) -> Result<Option<ServerMsg>, Box<dyn std::error::Error>> {
        loop {
            let next = tokio::time::timeout(RECV_TIMEOUT, self.stream.next())
                .await
                .map_err(|_| "timeout waiting for message")?;
            match next {
                Some(Ok(Message::Text(text))) => {
                    return Ok(Some(serde_json::from_str(text.as_str())?));
                }
                Some(Ok(Message::Close(_))) | None => return Ok(None),
                Some(Ok(_)) => continue,
                Some(Err(err)) => return Err(Box::new(err)),
            }
        }
    }

    /// Next `gameState` payload.
    pub async fn recv_view(&mut self) -> Result<GameStateView, Box<dyn std::error::Error>> {
        match self.recv_msg().await? {
            Some(ServerMsg::GameState(view)) => Ok(view),
            other => Err(format!("expected gameState, got {other:?}").into()),
        }
    }

    /// Read snapshots until one satisfies `pred`.
    pub async fn recv_view_until<F>(
        &mut self,
        mut pred: F,
    ) -> Result<GameStateView, Box<dyn std::error::Error>>
    where
        F: FnMut(&GameStateView) -> bool,
    {
        loop {
            let view = self.recv_view().await?;
            if pred(&view) {
                return Ok(view);
            }
        }
    }
}
