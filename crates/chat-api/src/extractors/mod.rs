//! Axum extractors for request handling

mod auth;

pub use auth::{AuthUser, Session};
