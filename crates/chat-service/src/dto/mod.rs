//! Data transfer objects
//!
//! - `Page`: the render decision handed to the page renderer
//! - Health and readiness responses

pub mod pages;
pub mod responses;

pub use pages::{paths, Page, PageData};
pub use responses::{HealthChecks, HealthResponse, ReadinessResponse};
