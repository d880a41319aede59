//! # chat-gateway
//!
//! WebSocket endpoint that tracks which users are connected right now.
//!
//! Every open socket registers a session in the [`ConnectionRegistry`], which
//! the presence lookups read through the `PresenceRegistry` port. When a
//! user's last socket closes, an online record is persisted as their
//! "last online" marker.

pub mod connection;
pub mod protocol;
pub mod server;

pub use connection::{ConnectionRegistry, Session};
pub use server::{create_router, socket_handler, GatewayState, SOCKET_PATH};
