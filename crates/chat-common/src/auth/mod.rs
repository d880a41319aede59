//! Authentication utilities

mod jwt;

pub use jwt::{Claims, JwtService};

/// Cookie carrying the access token for browser sessions
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
