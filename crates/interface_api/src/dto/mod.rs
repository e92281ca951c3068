//! Request/response data transfer objects

pub mod interest_rate;
