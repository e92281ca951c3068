//! Repository implementations for catalogue entities
//!
//! Repositories encapsulate SQL queries and map database rows to plain row
//! structs. Conversion to domain types happens in the adapters.

pub mod interest_rate;

pub use interest_rate::{InterestRateRepository, InterestRateRow, NewInterestRate};
