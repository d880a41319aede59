//! # chat-db
//!
//! Storage layer implementing the repository ports from `chat-core`.
//!
//! ## Overview
//!
//! - PostgreSQL repositories via SQLx (`Pg*Repository`)
//! - Database models with SQLx `FromRow` derives and model → entity mappers
//! - In-memory repositories (`memory`) backed by `DashMap`, used by tests and
//!   local runs without a database
//! - Runtime migrations from `migrations/`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_db::{create_pool, run_migrations, DatabaseConfig, PgRoomRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     let rooms = PgRoomRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{InMemoryOnlineRecordRepository, InMemoryRoomRepository, InMemoryUserRepository};
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgOnlineRecordRepository, PgRoomRepository, PgUserRepository};
