//! # chat-service
//!
//! Application layer: resolves direct-message rooms, answers presence
//! queries and decides which page each request renders.

pub mod dto;
pub mod services;

pub use dto::{paths, HealthResponse, Page, PageData, ReadinessResponse};
pub use services::{
    PageService, PresenceService, RoomService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
