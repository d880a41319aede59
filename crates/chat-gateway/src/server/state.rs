//! Gateway state
//!
//! Shared dependencies of the socket endpoint and the session lifecycle.

use std::sync::Arc;

use chat_core::{ObjectId, OnlineRecord};
use chat_service::ServiceContext;

use crate::connection::{ConnectionRegistry, Session};

/// Gateway application state
#[derive(Clone)]
pub struct GatewayState {
    /// Service context with repositories and services
    service_context: Arc<ServiceContext>,
    /// Live sessions; the same registry the presence lookups read
    registry: Arc<ConnectionRegistry>,
}

impl GatewayState {
    /// Create a new gateway state
    pub fn new(service_context: ServiceContext, registry: Arc<ConnectionRegistry>) -> Self {
        Self {
            service_context: Arc::new(service_context),
            registry,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Register a new live session for a user and return its ID
    pub fn connect(&self, user_id: ObjectId) -> String {
        let session_id = Session::generate_id();
        let first = self.registry.register(user_id, &session_id);

        tracing::info!(
            user_id = %user_id,
            session_id = %session_id,
            first_session = first,
            user_sessions = self.registry.session_count(user_id),
            online_users = self.registry.online_users(),
            "WebSocket connection established"
        );

        session_id
    }

    /// End a live session.
    ///
    /// When it was the user's last one, an online record is persisted.
    /// Returns whether the user went offline.
    pub async fn disconnect(&self, user_id: ObjectId, session_id: &str) -> bool {
        tracing::info!(user_id = %user_id, session_id = %session_id, "Cleaning up connection");

        if !self.registry.unregister(user_id, session_id) {
            tracing::debug!(
                user_id = %user_id,
                user_sessions = self.registry.session_count(user_id),
                "Session closed, user not offline"
            );
            return false;
        }

        let ctx = self.service_context();
        let record = OnlineRecord::new(ctx.generate_id(), user_id);
        match ctx.online_record_repo().record(&record).await {
            Ok(()) => tracing::debug!(
                user_id = %user_id,
                online_users = self.registry.online_users(),
                "User went offline, last online recorded"
            ),
            Err(e) => tracing::warn!(
                user_id = %user_id,
                error = %e,
                "Failed to record last online"
            ),
        }

        true
    }
}

impl std::fmt::Debug for GatewayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayState")
            .field("service_context", &self.service_context)
            .field("registry", &self.registry)
            .finish()
    }
}
