//! Route definitions

use axum::{routing::get, Router};

use crate::handlers::{health, pages};
use crate::state::AppState;

/// Create the page router
pub fn create_router() -> Router<AppState> {
    Router::new().merge(page_routes()).merge(health_routes())
}

/// Server-rendered pages
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/chat", get(pages::chat))
        .route("/chat/:room_id", get(pages::chat_room))
        .route("/login", get(pages::login))
        .route("/logon", get(pages::logon))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
