//! WebSocket close codes sent by the gateway

/// Close codes (RFC 6455 section 7.4.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum CloseCode {
    /// Normal closure
    Normal = 1000,
    /// Going away (server shutdown or idle timeout)
    Away = 1001,
    /// Received a frame type the gateway does not accept
    Unsupported = 1003,
    /// Unexpected server-side failure
    Error = 1011,
}

impl CloseCode {
    /// Get the raw u16 value
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Human-readable reason sent with the close frame
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Normal => "Normal closure",
            Self::Away => "Idle timeout",
            Self::Unsupported => "Binary frames are not supported",
            Self::Error => "Internal error",
        }
    }
}

impl std::fmt::Display for CloseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_u16(), self.reason())
    }
}
