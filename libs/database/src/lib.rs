//! PostgreSQL connection management shared by the services in this workspace.
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` - `core_config::FromEnv` for [`postgres::PostgresConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! // Building the pool never touches the server.
//! let db = postgres::connect_lazy(&config).await?;
//! // Ping and create the schema, retrying transient failures.
//! postgres::prepare::<Migrator>(&db, config.retry_config(), "products-api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
