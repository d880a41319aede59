//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::sync::Arc;

use axum::Router;
use chat_common::{AppConfig, AppError, JwtService};
use chat_db::{
    create_pool, run_migrations, PgOnlineRecordRepository, PgRoomRepository, PgUserRepository,
};
use chat_gateway::ConnectionRegistry;
use chat_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, MiddlewareConfig};
use crate::render::MiniJinjaRenderer;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState, config: &MiddlewareConfig) -> Router {
    let socket: Router<AppState> =
        chat_gateway::create_router().with_state(state.gateway().clone());
    let router = create_router().merge(socket);
    apply_middleware(router, config).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: &AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = chat_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // Live sessions, written by the socket gateway and read by presence lookups
    let registry = ConnectionRegistry::new_shared();

    let service_context = ServiceContextBuilder::new()
        .pool(pool.clone())
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .room_repo(Arc::new(PgRoomRepository::new(pool.clone())))
        .online_record_repo(Arc::new(PgOnlineRecordRepository::new(pool)))
        .presence_registry(registry.clone())
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    let renderer = Arc::new(MiniJinjaRenderer::new(config.app.name.clone())?);

    Ok(AppState::new(service_context, registry, renderer))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let state = create_app_state(&config).await?;
    let app = create_app(state, &MiddlewareConfig::from(&config));

    run_server(app, &config.api.address()).await
}
