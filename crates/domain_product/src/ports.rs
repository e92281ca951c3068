//! Product Domain Ports
//!
//! This module defines the repository port for interest rates, enabling
//! swappable storage implementations (PostgreSQL, in-memory mock).
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_product::{InterestRateRepository, InterestRateService};
//! use std::sync::Arc;
//!
//! // Application services receive the port trait
//! let repository: Arc<dyn InterestRateRepository> = Arc::new(adapter);
//! let service = InterestRateService::new(repository);
//! let actives = service.list_all_actives().await?;
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use core_kernel::{DomainPort, InterestRateId, PortError};

use crate::interest_rate::{InterestRate, RateState};

/// Request for creating a new interest rate
///
/// Fields are optional so that missing required values surface as domain
/// validation errors rather than deserialization failures. State and end
/// are not accepted: new rates always start active with an open period.
#[derive(Debug, Clone, Default)]
pub struct CreateInterestRateRequest {
    /// Descriptive label
    pub name: Option<String>,
    /// The rate itself (required, non-negative)
    pub interest_rate: Option<Decimal>,
    /// When the rate becomes effective (required)
    pub start: Option<DateTime<Utc>>,
}

/// Request for updating an interest rate
///
/// Only the fields that are `Some` are applied.
#[derive(Debug, Clone, Default)]
pub struct UpdateInterestRateRequest {
    /// New label
    pub name: Option<String>,
    /// New rate
    pub interest_rate: Option<Decimal>,
    /// New effective start
    pub start: Option<DateTime<Utc>>,
    /// New effective end
    pub end: Option<DateTime<Utc>>,
}

impl UpdateInterestRateRequest {
    /// Creates a request that only changes the rate
    pub fn rate(interest_rate: Decimal) -> Self {
        Self {
            interest_rate: Some(interest_rate),
            ..Default::default()
        }
    }

    /// Returns true if the request changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.interest_rate.is_none()
            && self.start.is_none()
            && self.end.is_none()
    }

    /// Applies the present fields onto an existing record
    ///
    /// Identity and state are never touched.
    pub fn apply_to(&self, record: &mut InterestRate) {
        if let Some(name) = &self.name {
            record.name = Some(name.clone());
        }
        if let Some(interest_rate) = self.interest_rate {
            record.interest_rate = interest_rate;
        }
        if let Some(start) = self.start {
            record.start = start;
        }
        if let Some(end) = self.end {
            record.end = Some(end);
        }
    }
}

/// Storage port for interest rates
///
/// Implementations own durable storage. All failures are reported as
/// `PortError`; absence of a record is `Ok(None)`, not an error.
#[async_trait]
pub trait InterestRateRepository: DomainPort {
    /// Returns every record in the given state, in storage order
    async fn find_by_state(&self, state: RateState) -> Result<Vec<InterestRate>, PortError>;

    /// Returns the record with the given identifier, if any
    async fn find_by_id(&self, id: InterestRateId) -> Result<Option<InterestRate>, PortError>;

    /// Inserts the record when it has no id, otherwise updates it
    ///
    /// # Returns
    ///
    /// The stored record, with its id assigned
    async fn save(&self, record: InterestRate) -> Result<InterestRate, PortError>;
}

/// Mock implementation of InterestRateRepository for testing
///
/// Stores records in memory, counts calls per method, and can be switched
/// into a failing mode to simulate an unreachable database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use core_kernel::{AdapterHealth, HealthCheckResult, HealthCheckable};
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of InterestRateRepository
    #[derive(Debug, Default)]
    pub struct MockInterestRateRepository {
        records: Arc<RwLock<BTreeMap<InterestRateId, InterestRate>>>,
        failure: Arc<RwLock<Option<String>>>,
        find_by_state_calls: AtomicUsize,
        find_by_id_calls: AtomicUsize,
        save_calls: AtomicUsize,
    }

    impl MockInterestRateRepository {
        /// Creates an empty mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with records for testing
        ///
        /// Records without an id are assigned the next free one.
        pub async fn with_rates(rates: Vec<InterestRate>) -> Self {
            let repository = Self::new();
            {
                let mut records = repository.records.write().await;
                for mut rate in rates {
                    let id = match rate.id {
                        Some(id) => id,
                        None => next_id(&records),
                    };
                    rate.id = Some(id);
                    records.insert(id, rate);
                }
            }
            repository
        }

        /// Makes every subsequent call fail with a connection error
        pub async fn fail_with(&self, message: impl Into<String>) {
            *self.failure.write().await = Some(message.into());
        }

        /// Restores normal behaviour after `fail_with`
        pub async fn recover(&self) {
            *self.failure.write().await = None;
        }

        /// Returns a snapshot of a stored record, bypassing call counting
        pub async fn stored(&self, id: InterestRateId) -> Option<InterestRate> {
            self.records.read().await.get(&id).cloned()
        }

        pub fn find_by_state_calls(&self) -> usize {
            self.find_by_state_calls.load(Ordering::SeqCst)
        }

        pub fn find_by_id_calls(&self) -> usize {
            self.find_by_id_calls.load(Ordering::SeqCst)
        }

        pub fn save_calls(&self) -> usize {
            self.save_calls.load(Ordering::SeqCst)
        }

        async fn check_failure(&self) -> Result<(), PortError> {
            match self.failure.read().await.as_ref() {
                Some(message) => Err(PortError::connection(message.clone())),
                None => Ok(()),
            }
        }
    }

    fn next_id(records: &BTreeMap<InterestRateId, InterestRate>) -> InterestRateId {
        let max = records.keys().next_back().map(|id| id.value()).unwrap_or(0);
        InterestRateId::new(max + 1)
    }

    impl DomainPort for MockInterestRateRepository {}

    #[async_trait]
    impl HealthCheckable for MockInterestRateRepository {
        async fn health_check(&self) -> HealthCheckResult {
            let failure = self.failure.read().await.clone();
            HealthCheckResult {
                adapter_id: "mock-interest-rate-repository".to_string(),
                status: if failure.is_some() {
                    AdapterHealth::Unhealthy
                } else {
                    AdapterHealth::Healthy
                },
                latency_ms: 0,
                message: failure,
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl InterestRateRepository for MockInterestRateRepository {
        async fn find_by_state(&self, state: RateState) -> Result<Vec<InterestRate>, PortError> {
            self.find_by_state_calls.fetch_add(1, Ordering::SeqCst);
            self.check_failure().await?;

            Ok(self
                .records
                .read()
                .await
                .values()
                .filter(|r| r.state == state)
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, id: InterestRateId) -> Result<Option<InterestRate>, PortError> {
            self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
            self.check_failure().await?;

            Ok(self.records.read().await.get(&id).cloned())
        }

        async fn save(&self, mut record: InterestRate) -> Result<InterestRate, PortError> {
            self.save_calls.fetch_add(1, Ordering::SeqCst);
            self.check_failure().await?;

            let mut records = self.records.write().await;
            let id = match record.id {
                Some(id) if records.contains_key(&id) => id,
                Some(id) => return Err(PortError::not_found("InterestRate", id)),
                None => next_id(&records),
            };
            record.id = Some(id);
            records.insert(id, record.clone());
            Ok(record)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::mock::MockInterestRateRepository;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_mock_save_assigns_sequential_ids() {
        let repository = MockInterestRateRepository::new();

        let first = repository
            .save(InterestRate::new_active(None, dec!(0.03), Utc::now()))
            .await
            .unwrap();
        let second = repository
            .save(InterestRate::new_active(None, dec!(0.05), Utc::now()))
            .await
            .unwrap();

        assert_eq!(first.id, Some(InterestRateId::new(1)));
        assert_eq!(second.id, Some(InterestRateId::new(2)));
        assert_eq!(repository.save_calls(), 2);
    }

    #[tokio::test]
    async fn test_mock_save_unknown_id_is_not_found() {
        let repository = MockInterestRateRepository::new();
        let mut rate = InterestRate::new_active(None, dec!(0.03), Utc::now());
        rate.id = Some(InterestRateId::new(40));

        let err = repository.save(rate).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_mock_find_by_state_filters() {
        let mut inactive = InterestRate::new_active(None, dec!(0.01), Utc::now());
        inactive.inactivate(Utc::now());
        let repository = MockInterestRateRepository::with_rates(vec![
            InterestRate::new_active(None, dec!(0.03), Utc::now()),
            inactive,
        ])
        .await;

        let actives = repository.find_by_state(RateState::Active).await.unwrap();
        let inactives = repository.find_by_state(RateState::Inactive).await.unwrap();

        assert_eq!(actives.len(), 1);
        assert_eq!(inactives.len(), 1);
        assert_eq!(repository.find_by_state_calls(), 2);
    }

    #[tokio::test]
    async fn test_mock_failure_mode() {
        let repository = MockInterestRateRepository::new();
        repository.fail_with("Database connection error").await;

        let err = repository.find_by_id(InterestRateId::new(1)).await.unwrap_err();
        assert!(err.is_transient());

        repository.recover().await;
        assert!(repository.find_by_id(InterestRateId::new(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mock_health_follows_failure_mode() {
        use core_kernel::{AdapterHealth, HealthCheckable};

        let repository = MockInterestRateRepository::new();
        assert_eq!(repository.health_check().await.status, AdapterHealth::Healthy);

        repository.fail_with("down").await;
        let result = repository.health_check().await;
        assert_eq!(result.status, AdapterHealth::Unhealthy);
        assert_eq!(result.message.as_deref(), Some("down"));
    }

    #[test]
    fn test_update_request_apply_keeps_identity() {
        let mut rate = InterestRate::new_active(Some("Old".to_string()), dec!(0.03), Utc::now());
        rate.id = Some(InterestRateId::new(3));

        let request = UpdateInterestRateRequest {
            name: Some("New".to_string()),
            interest_rate: Some(dec!(0.04)),
            ..Default::default()
        };
        assert!(!request.is_empty());
        request.apply_to(&mut rate);

        assert_eq!(rate.id, Some(InterestRateId::new(3)));
        assert_eq!(rate.name.as_deref(), Some("New"));
        assert_eq!(rate.interest_rate, dec!(0.04));
        assert_eq!(rate.state, RateState::Active);
    }
}
