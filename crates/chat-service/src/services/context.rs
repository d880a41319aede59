//! Service context - dependency container for services
//!
//! Holds the repositories, the live presence registry, the room identifier
//! validator and the ID generator.

use std::sync::Arc;

use chat_common::auth::JwtService;
use chat_core::traits::{
    ObjectIdValidator, OnlineRecordRepository, PresenceRegistry, RoomIdValidator, RoomRepository,
    UserRepository,
};
use chat_core::{ObjectId, ObjectIdGenerator};
use chat_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// `pool` is absent when the repositories are in-memory.
#[derive(Clone)]
pub struct ServiceContext {
    pool: Option<PgPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    room_repo: Arc<dyn RoomRepository>,
    online_record_repo: Arc<dyn OnlineRecordRepository>,

    // Presence
    presence_registry: Arc<dyn PresenceRegistry>,

    room_id_validator: Arc<dyn RoomIdValidator>,
    jwt_service: Arc<JwtService>,
    id_generator: Arc<ObjectIdGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: Option<PgPool>,
        user_repo: Arc<dyn UserRepository>,
        room_repo: Arc<dyn RoomRepository>,
        online_record_repo: Arc<dyn OnlineRecordRepository>,
        presence_registry: Arc<dyn PresenceRegistry>,
        room_id_validator: Arc<dyn RoomIdValidator>,
        jwt_service: Arc<JwtService>,
        id_generator: Arc<ObjectIdGenerator>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            room_repo,
            online_record_repo,
            presence_registry,
            room_id_validator,
            jwt_service,
            id_generator,
        }
    }

    // === Database Pool ===

    /// PostgreSQL pool, if the repositories are database-backed
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn room_repo(&self) -> &dyn RoomRepository {
        self.room_repo.as_ref()
    }

    pub fn online_record_repo(&self) -> &dyn OnlineRecordRepository {
        self.online_record_repo.as_ref()
    }

    // === Presence ===

    pub fn presence_registry(&self) -> &dyn PresenceRegistry {
        self.presence_registry.as_ref()
    }

    // === Services ===

    pub fn room_id_validator(&self) -> &dyn RoomIdValidator {
        self.room_id_validator.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new ObjectId
    pub fn generate_id(&self) -> ObjectId {
        self.id_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// The room identifier validator and the ID generator have defaults; every
/// other dependency is required.
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    room_repo: Option<Arc<dyn RoomRepository>>,
    online_record_repo: Option<Arc<dyn OnlineRecordRepository>>,
    presence_registry: Option<Arc<dyn PresenceRegistry>>,
    room_id_validator: Option<Arc<dyn RoomIdValidator>>,
    jwt_service: Option<Arc<JwtService>>,
    id_generator: Option<Arc<ObjectIdGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn room_repo(mut self, repo: Arc<dyn RoomRepository>) -> Self {
        self.room_repo = Some(repo);
        self
    }

    pub fn online_record_repo(mut self, repo: Arc<dyn OnlineRecordRepository>) -> Self {
        self.online_record_repo = Some(repo);
        self
    }

    pub fn presence_registry(mut self, registry: Arc<dyn PresenceRegistry>) -> Self {
        self.presence_registry = Some(registry);
        self
    }

    pub fn room_id_validator(mut self, validator: Arc<dyn RoomIdValidator>) -> Self {
        self.room_id_validator = Some(validator);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn id_generator(mut self, generator: Arc<ObjectIdGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.room_repo
                .ok_or_else(|| ServiceError::validation("room_repo is required"))?,
            self.online_record_repo
                .ok_or_else(|| ServiceError::validation("online_record_repo is required"))?,
            self.presence_registry
                .ok_or_else(|| ServiceError::validation("presence_registry is required"))?,
            self.room_id_validator
                .unwrap_or_else(|| Arc::new(ObjectIdValidator)),
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.id_generator
                .unwrap_or_else(|| Arc::new(ObjectIdGenerator::new())),
        ))
    }
}
