//! Socket protocol
//!
//! Clients send the text frame `ping` and get `pong` back. Other text is
//! ignored; binary frames close the socket.

mod close_codes;
mod frames;

pub use close_codes::CloseCode;
pub use frames::{Inbound, PING, PONG};
