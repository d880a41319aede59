//! Test helpers for integration tests
//!
//! Provides a server spawned on an ephemeral port, seeded users with access
//! tokens, and request shortcuts.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chat_api::{create_app, create_app_state, MiddlewareConfig};
use chat_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, JwtConfig, JwtService, ServerConfig,
};
use chat_core::traits::UserRepository;
use chat_core::{ObjectIdGenerator, User};
use chat_db::{create_pool, PgPool, PgUserRepository};
use reqwest::{Client, Response, StatusCode};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub pool: PgPool,
    pub jwt: JwtService,
    ids: Arc<ObjectIdGenerator>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(&config).await?;
        let app = create_app(state, &MiddlewareConfig::from(&config));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Separate pool for seeding and inspecting rows
        let pool = create_pool(&chat_db::DatabaseConfig {
            url: config.database.url.clone(),
            max_connections: 2,
            min_connections: 0,
            ..Default::default()
        })
        .await?;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            pool,
            jwt: JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry),
            ids: Arc::new(ObjectIdGenerator::new()),
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// WebSocket URL of the socket endpoint for a token
    pub fn socket_url(&self, token: &str) -> String {
        format!("ws://{}{}?token={token}", self.addr, chat_gateway::SOCKET_PATH)
    }

    /// Insert a user and issue an access token for them
    pub async fn seed_user(&self, prefix: &str) -> Result<(User, String)> {
        let user = User::new(self.ids.generate(), crate::unique_username(prefix));
        PgUserRepository::new(self.pool.clone()).create(&user).await?;
        let token = self.jwt.issue_access_token(user.id)?;
        Ok((user, token))
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a GET request with the session cookie
    pub async fn get_with_cookie(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Cookie", format!("{}={token}", chat_common::ACCESS_TOKEN_COOKIE))
            .send()
            .await?)
    }
}

/// Create a test configuration from `DATABASE_URL` and `JWT_SECRET`
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    Ok(AppConfig {
        app: AppSettings {
            name: "chat-pages-test".to_string(),
            env: chat_common::Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
        },
        database: DatabaseConfig {
            url: std::env::var("DATABASE_URL")?,
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            access_token_expiry: 900,
        },
        cors: CorsConfig::default(),
    })
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("JWT_SECRET").is_err() {
        eprintln!("Skipping test: JWT_SECRET not set");
        return false;
    }

    true
}

/// Assert response status and return the body text
pub async fn assert_page(response: Response, expected_status: StatusCode) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(body)
}

/// Assert response status and parse JSON body
pub async fn assert_json(
    response: Response,
    expected_status: StatusCode,
) -> Result<serde_json::Value> {
    let body = assert_page(response, expected_status).await?;
    Ok(serde_json::from_str(&body)?)
}
