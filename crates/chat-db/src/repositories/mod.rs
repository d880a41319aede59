//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in chat-core.

mod error;
mod online_record;
mod room;
mod user;

pub use online_record::PgOnlineRecordRepository;
pub use room::PgRoomRepository;
pub use user::PgUserRepository;
