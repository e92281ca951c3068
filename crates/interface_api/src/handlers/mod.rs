//! Request handlers

pub mod health;
pub mod interest_rate;
