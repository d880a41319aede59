//! Gateway routes
//!
//! The gateway has no server of its own; its router is merged into the page
//! server so both share one connection registry.

mod handler;
mod state;

pub use handler::{socket_handler, SocketQuery};
pub use state::GatewayState;

use axum::{routing::get, Router};

/// Path of the WebSocket endpoint
pub const SOCKET_PATH: &str = "/socket";

/// Create the gateway router
pub fn create_router() -> Router<GatewayState> {
    Router::new().route(SOCKET_PATH, get(socket_handler))
}
