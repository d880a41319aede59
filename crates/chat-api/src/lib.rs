//! # chat-api
//!
//! Page server built with the Axum framework: server-rendered pages for the
//! chat client, health probes and the socket endpoint.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use middleware::MiddlewareConfig;
pub use render::{MiniJinjaRenderer, PageRenderer};
pub use server::{create_app, create_app_state, run};
pub use state::AppState;
