//! Core Kernel - Foundational types and utilities for the products core
//!
//! This crate provides the fundamental building blocks used across the domain,
//! infrastructure and API crates:
//! - Strongly-typed identifiers for catalogue entities
//! - Effective periods (start / optional end) for time-bounded records
//! - Port abstractions shared by every repository adapter

pub mod temporal;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use temporal::{EffectivePeriod, TemporalError};
pub use identifiers::InterestRateId;
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
pub use error::CoreError;
