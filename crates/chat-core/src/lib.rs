//! # chat-core
//!
//! Domain layer containing entities, value objects and the ports (traits) the
//! page router depends on: user lookup, room store, online-record store,
//! live presence registry and room-identifier validation.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{OnlineRecord, Room, RoomKind, RoomMembers, User};
pub use error::DomainError;
pub use traits::{
    ObjectIdValidator, OnlineRecordRepository, PresenceRegistry, RepoResult, RoomIdValidator,
    RoomRepository, UserRepository,
};
pub use value_objects::{ObjectId, ObjectIdGenerator, ObjectIdParseError, Presence};
