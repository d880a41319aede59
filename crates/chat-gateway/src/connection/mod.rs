//! Connection tracking

mod registry;
mod session;

pub use registry::ConnectionRegistry;
pub use session::Session;
