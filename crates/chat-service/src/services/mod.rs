//! Business logic services
//!
//! Services borrow a `ServiceContext` and orchestrate the repository and
//! presence ports.

pub mod context;
pub mod error;
pub mod pages;
pub mod presence;
pub mod room;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use pages::PageService;
pub use presence::PresenceService;
pub use room::RoomService;
