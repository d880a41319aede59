//! Application state
//!
//! Holds the shared state for the Axum application: the service context, the
//! socket gateway state and the page renderer.

use std::sync::Arc;

use chat_common::JwtService;
use chat_gateway::{ConnectionRegistry, GatewayState};
use chat_service::ServiceContext;

use crate::render::PageRenderer;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context and live connection registry
    gateway: GatewayState,
    /// HTML renderer for pages
    renderer: Arc<dyn PageRenderer>,
}

impl AppState {
    /// Create a new AppState
    ///
    /// `registry` must be the presence registry the service context reads.
    pub fn new(
        service_context: ServiceContext,
        registry: Arc<ConnectionRegistry>,
        renderer: Arc<dyn PageRenderer>,
    ) -> Self {
        Self {
            gateway: GatewayState::new(service_context, registry),
            renderer,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        self.gateway.service_context()
    }

    /// Get the socket gateway state
    pub fn gateway(&self) -> &GatewayState {
        &self.gateway
    }

    pub fn renderer(&self) -> &dyn PageRenderer {
        self.renderer.as_ref()
    }

    /// Get the JWT service from the service context
    pub fn jwt_service(&self) -> &JwtService {
        self.service_context().jwt_service()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("gateway", &self.gateway)
            .field("renderer", &"PageRenderer")
            .finish()
    }
}
