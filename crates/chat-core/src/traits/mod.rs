//! Ports - traits implemented by infrastructure crates

mod identifier;
mod presence;
mod repositories;

pub use identifier::{ObjectIdValidator, RoomIdValidator};
pub use presence::PresenceRegistry;
pub use repositories::{OnlineRecordRepository, RepoResult, RoomRepository, UserRepository};
