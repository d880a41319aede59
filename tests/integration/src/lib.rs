//! Integration test utilities for the chat page server
//!
//! Spawns the real server against PostgreSQL and talks to it over HTTP and
//! WebSocket.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
