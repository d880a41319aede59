//! Inbound frame classification

use axum::extract::ws::Message;

use super::CloseCode;

/// Heartbeat request text
pub const PING: &str = "ping";
/// Heartbeat reply text
pub const PONG: &str = "pong";

/// What to do with a frame received from the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inbound {
    /// Reply with `pong`
    Ping,
    /// Nothing to do
    Ignore,
    /// Close the socket with this code
    Close(CloseCode),
    /// The client closed the socket
    Closed,
}

impl Inbound {
    /// Classify a received frame
    #[must_use]
    pub fn classify(message: &Message) -> Self {
        match message {
            Message::Text(text) if text.trim() == PING => Self::Ping,
            Message::Text(_) | Message::Ping(_) | Message::Pong(_) => Self::Ignore,
            Message::Binary(_) => Self::Close(CloseCode::Unsupported),
            Message::Close(_) => Self::Closed,
        }
    }
}
