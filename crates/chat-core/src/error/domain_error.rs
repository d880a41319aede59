//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// "Username not found" and "no online record" are not errors; lookups
/// return `Option` for those.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid room: {0}")]
    InvalidRoom(String),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRoom(_) => "INVALID_ROOM",
            Self::InvalidId(_) => "INVALID_ID",
            Self::UsernameTaken(_) => "USERNAME_TAKEN",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidId(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameTaken(_))
    }
}
