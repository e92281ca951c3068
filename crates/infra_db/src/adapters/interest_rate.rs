//! PostgreSQL Interest Rate Adapter
//!
//! This module provides the database adapter for the product domain,
//! implementing the `InterestRateRepository` port on top of the SQL
//! repository in `crate::repositories::interest_rate`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresInterestRateAdapter;
//! use domain_product::{InterestRateRepository, InterestRateService};
//! use std::sync::Arc;
//!
//! let port: Arc<dyn InterestRateRepository> = Arc::new(PostgresInterestRateAdapter::new(pool));
//! let service = InterestRateService::new(port);
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, InterestRateId, PortError,
};
use domain_product::{InterestRate, InterestRateRepository as InterestRatePort, RateState};

use crate::error::DatabaseError;
use crate::repositories::interest_rate::{InterestRateRepository, InterestRateRow, NewInterestRate};

const ADAPTER_ID: &str = "postgres-interest-rate-adapter";

/// PostgreSQL-backed implementation of the interest rate repository port
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - `DatabaseError::NotFound` -> `PortError::NotFound`
/// - `DatabaseError::DuplicateEntry` -> `PortError::Conflict`
/// - `DatabaseError::ConstraintViolation` -> `PortError::Validation`
/// - connection and pool errors -> `PortError::Connection`
/// - anything else -> `PortError::Internal`
#[derive(Debug, Clone)]
pub struct PostgresInterestRateAdapter {
    repository: InterestRateRepository,
    pool: PgPool,
}

impl PostgresInterestRateAdapter {
    /// Creates a new PostgreSQL interest rate adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: InterestRateRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns a reference to the underlying SQL repository
    pub fn repository(&self) -> &InterestRateRepository {
        &self.repository
    }
}

impl DomainPort for PostgresInterestRateAdapter {}

#[async_trait]
impl HealthCheckable for PostgresInterestRateAdapter {
    /// Checks database connectivity with `SELECT 1`
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
        };

        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl InterestRatePort for PostgresInterestRateAdapter {
    #[instrument(skip(self))]
    async fn find_by_state(&self, state: RateState) -> Result<Vec<InterestRate>, PortError> {
        debug!("Fetching interest rates by state");

        let rows = self
            .repository
            .find_by_state(state.code())
            .await
            .map_err(db_to_port_error)?;

        rows.into_iter().map(row_to_interest_rate).collect()
    }

    #[instrument(skip(self), fields(interest_rate_id = %id))]
    async fn find_by_id(&self, id: InterestRateId) -> Result<Option<InterestRate>, PortError> {
        debug!("Fetching interest rate by ID");

        self.repository
            .find_by_id(id.value())
            .await
            .map_err(db_to_port_error)?
            .map(row_to_interest_rate)
            .transpose()
    }

    #[instrument(skip(self, record), fields(interest_rate_id = ?record.id))]
    async fn save(&self, record: InterestRate) -> Result<InterestRate, PortError> {
        let row = match record.id {
            None => {
                debug!("Inserting interest rate");
                self.repository
                    .insert(NewInterestRate {
                        name: record.name,
                        interest_rate: record.interest_rate,
                        state: record.state.code().to_string(),
                        start_date: record.start,
                        end_date: record.end,
                    })
                    .await
            }
            Some(id) => {
                debug!("Updating interest rate");
                self.repository
                    .update(InterestRateRow {
                        id: id.value(),
                        name: record.name,
                        interest_rate: record.interest_rate,
                        state: record.state.code().to_string(),
                        start_date: record.start,
                        end_date: record.end,
                    })
                    .await
            }
        }
        .map_err(db_to_port_error)?;

        row_to_interest_rate(row)
    }
}

/// Converts a database error to a port error
fn db_to_port_error(e: DatabaseError) -> PortError {
    match e {
        DatabaseError::NotFound(msg) => PortError::NotFound {
            entity_type: "InterestRate".to_string(),
            id: msg,
        },
        DatabaseError::DuplicateEntry(msg) => PortError::conflict(msg),
        DatabaseError::ConstraintViolation(msg) => PortError::validation(msg),
        DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted => PortError::Connection {
            message: e.to_string(),
            source: Some(Box::new(e)),
        },
        other => PortError::Internal {
            message: other.to_string(),
            source: Some(Box::new(other)),
        },
    }
}

/// Converts a database row to a domain InterestRate
fn row_to_interest_rate(row: InterestRateRow) -> Result<InterestRate, PortError> {
    let state = row.state.parse::<RateState>().map_err(|e| PortError::Internal {
        message: format!("Invalid state code for interest rate {}: {}", row.id, e),
        source: None,
    })?;

    Ok(InterestRate {
        id: Some(InterestRateId::new(row.id)),
        name: row.name,
        interest_rate: row.interest_rate,
        state,
        start: row.start_date,
        end: row.end_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn sample_row(state: &str) -> InterestRateRow {
        InterestRateRow {
            id: 1,
            name: Some("Standard Rate".to_string()),
            interest_rate: dec!(0.0300),
            state: state.to_string(),
            start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            end_date: None,
        }
    }

    #[test]
    fn test_row_to_interest_rate() {
        let rate = row_to_interest_rate(sample_row("ACT")).unwrap();

        assert_eq!(rate.id, Some(InterestRateId::new(1)));
        assert_eq!(rate.state, RateState::Active);
        assert_eq!(rate.interest_rate, dec!(0.03));
        assert!(rate.end.is_none());
    }

    #[test]
    fn test_row_with_unknown_state_is_internal_error() {
        let err = row_to_interest_rate(sample_row("XXX")).unwrap_err();
        assert!(matches!(err, PortError::Internal { .. }));
    }

    #[test]
    fn test_error_translation() {
        assert!(db_to_port_error(DatabaseError::not_found("InterestRate", 9)).is_not_found());
        assert!(db_to_port_error(DatabaseError::PoolExhausted).is_transient());
        assert!(matches!(
            db_to_port_error(DatabaseError::ConstraintViolation("interest_rate_check".to_string())),
            PortError::Validation { .. }
        ));
        assert!(matches!(
            db_to_port_error(DatabaseError::QueryFailed("syntax".to_string())),
            PortError::Internal { .. }
        ));
    }
}
