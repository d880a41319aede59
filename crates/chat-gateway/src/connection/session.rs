//! Session identifiers

/// Session helper for WebSocket connections
pub struct Session;

impl Session {
    /// Generate a new session ID
    #[must_use]
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
