//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! products core test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built interest rates, timestamps and seeded mock repositories
//! - `database`: PostgreSQL test containers
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
