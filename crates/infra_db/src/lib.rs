//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL persistence for the product catalogue
//! using SQLx.
//!
//! # Architecture
//!
//! - **Repositories** hold the SQL and map rows to plain row structs
//! - **Adapters** implement the domain ports on top of the repositories,
//!   converting rows to domain types and `DatabaseError` to `PortError`
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, run_migrations};
//! use infra_db::adapters::PostgresInterestRateAdapter;
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/products")).await?;
//! run_migrations(&pool).await?;
//! let adapter = PostgresInterestRateAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, DatabaseConfig, create_pool, run_migrations};
pub use error::DatabaseError;
pub use adapters::PostgresInterestRateAdapter;
