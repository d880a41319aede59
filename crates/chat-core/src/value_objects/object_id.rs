//! ObjectId - 96-bit document identifier
//!
//! Structure (12 bytes, big-endian):
//! - Bytes 0-3:  Timestamp (seconds since Unix epoch)
//! - Bytes 4-8:  Per-process random value
//! - Bytes 9-11: Counter (wraps at 2^24)
//!
//! The textual form is always 24 lower-case hex characters.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// 12-byte identifier used for users, rooms and online records
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Length of the hex representation
    pub const HEX_LEN: usize = 24;

    /// Create an ObjectId from raw bytes
    #[inline]
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Encode as 24 lower-case hex characters
    pub fn to_hex(&self) -> String {
        use fmt::Write;

        self.0.iter().fold(String::with_capacity(Self::HEX_LEN), |mut out, b| {
            let _ = write!(out, "{b:02x}");
            out
        })
    }

    /// Parse from the 24-character hex representation (either case)
    pub fn parse(s: &str) -> Result<Self, ObjectIdParseError> {
        if s.len() != Self::HEX_LEN {
            return Err(ObjectIdParseError::InvalidLength(s.len()));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ObjectIdParseError::InvalidFormat);
        }

        let mut bytes = [0u8; 12];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = &s[i * 2..i * 2 + 2];
            *byte = u8::from_str_radix(pair, 16).map_err(|_| ObjectIdParseError::InvalidFormat)?;
        }
        Ok(Self(bytes))
    }

    /// Whether `s` is a well-formed ObjectId string
    #[inline]
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }
}

/// Error when parsing an ObjectId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ObjectIdParseError {
    #[error("invalid object id length: expected 24, got {0}")]
    InvalidLength(usize),

    #[error("invalid object id format")]
    InvalidFormat,
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for ObjectId {
    type Err = ObjectIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse(s)
    }
}

// Serialized as the hex string everywhere (JSON, templates, JWT subject)
impl Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ObjectId::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Thread-safe ObjectId generator
///
/// The random 5-byte section is fixed per generator; the counter starts at a
/// random value and is advanced atomically.
pub struct ObjectIdGenerator {
    process_unique: [u8; 5],
    counter: AtomicU32,
}

impl ObjectIdGenerator {
    /// Counter is 24 bits wide
    const COUNTER_MASK: u32 = 0x00FF_FFFF;

    /// Create a new generator with a random process value and counter seed
    pub fn new() -> Self {
        let process_unique: [u8; 5] = rand::random();
        let seed: u32 = rand::random();
        Self::with_seed(process_unique, seed)
    }

    /// Create a generator with a fixed process value and counter seed
    pub fn with_seed(process_unique: [u8; 5], counter_seed: u32) -> Self {
        Self {
            process_unique,
            counter: AtomicU32::new(counter_seed & Self::COUNTER_MASK),
        }
    }

    /// Generate a new unique ObjectId
    pub fn generate(&self) -> ObjectId {
        let timestamp = self.current_timestamp().to_be_bytes();
        let counter = (self.counter.fetch_add(1, Ordering::Relaxed) & Self::COUNTER_MASK).to_be_bytes();

        let mut bytes = [0u8; 12];
        bytes[0..4].copy_from_slice(&timestamp);
        bytes[4..9].copy_from_slice(&self.process_unique);
        bytes[9..12].copy_from_slice(&counter[1..4]);
        ObjectId(bytes)
    }

    /// Current time in seconds since Unix epoch
    #[inline]
    fn current_timestamp(&self) -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0)
    }
}

impl Default for ObjectIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
