//! Product Catalogue Domain
//!
//! This crate manages the interest rates offered by account products.
//!
//! # Interest Rate Lifecycle
//!
//! - **Create**: a rate enters the catalogue as active (`ACT`) with an open
//!   effective period
//! - **Update**: name, rate and effective dates change, identity and state do not
//! - **Inactivate**: the rate moves to `INA` and its period is closed; records
//!   are never physically deleted
//!
//! # Examples
//!
//! ```rust
//! use domain_product::{InterestRate, RateState};
//! use rust_decimal_macros::dec;
//! use chrono::Utc;
//!
//! let rate = InterestRate::new_active(Some("Standard Rate".to_string()), dec!(0.03), Utc::now());
//! assert_eq!(rate.state, RateState::Active);
//! assert!(rate.end.is_none());
//! assert!(rate.validate().is_ok());
//! ```

pub mod interest_rate;
pub mod error;
pub mod ports;
pub mod services;

pub use interest_rate::{InterestRate, RateState};
pub use error::InterestRateError;
pub use ports::{
    InterestRateRepository, CreateInterestRateRequest, UpdateInterestRateRequest,
};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockInterestRateRepository;
pub use services::InterestRateService;
