//! Product domain services
//!
//! This module contains the application service that orchestrates the
//! interest rate lifecycle on top of the repository port.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use core_kernel::InterestRateId;

use crate::error::InterestRateError;
use crate::interest_rate::{InterestRate, RateState};
use crate::ports::{CreateInterestRateRequest, InterestRateRepository, UpdateInterestRateRequest};

/// Service for managing the interest rate catalogue
///
/// The service is stateless apart from its repository handle. Every operation
/// is one or two repository calls; repository failures are returned unchanged
/// inside `InterestRateError::Repository`.
#[derive(Clone)]
pub struct InterestRateService {
    repository: Arc<dyn InterestRateRepository>,
}

impl InterestRateService {
    /// Creates a new service over the given repository
    pub fn new(repository: Arc<dyn InterestRateRepository>) -> Self {
        Self { repository }
    }

    /// Lists every active interest rate
    ///
    /// # Returns
    ///
    /// The active records in repository order
    #[instrument(skip(self))]
    pub async fn list_all_actives(&self) -> Result<Vec<InterestRate>, InterestRateError> {
        let rates = self.repository.find_by_state(RateState::Active).await?;
        debug!(count = rates.len(), "Listed active interest rates");
        Ok(rates)
    }

    /// Retrieves an interest rate by identifier
    ///
    /// # Errors
    ///
    /// Returns `InterestRateError::NotFound` if no record exists for `id`
    #[instrument(skip(self), fields(interest_rate_id = %id))]
    pub async fn obtain_by_id(&self, id: InterestRateId) -> Result<InterestRate, InterestRateError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(InterestRateError::NotFound(id))
    }

    /// Creates a new active interest rate
    ///
    /// The rate and start are required; the rate must be non-negative. The
    /// record always starts active with no end, whatever the caller intends.
    ///
    /// # Errors
    ///
    /// Returns `InterestRateError::Validation` before touching the repository
    /// if the request is incomplete or violates the entity invariants
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        request: CreateInterestRateRequest,
    ) -> Result<InterestRate, InterestRateError> {
        let interest_rate = request
            .interest_rate
            .ok_or_else(|| InterestRateError::validation("Interest rate is required"))?;
        let start = request
            .start
            .ok_or_else(|| InterestRateError::validation("Start date is required"))?;

        let record = InterestRate::new_active(request.name, interest_rate, start);
        record.validate()?;

        let saved = self.repository.save(record).await?;
        info!(
            interest_rate_id = ?saved.id,
            rate = %saved.interest_rate,
            "Interest rate created"
        );
        Ok(saved)
    }

    /// Updates an existing interest rate
    ///
    /// Applies the fields present in the request while preserving the id and
    /// the state, then validates the resulting record.
    ///
    /// # Errors
    ///
    /// - `InterestRateError::NotFound` if no record exists for `id`
    /// - `InterestRateError::Validation` if the result violates an invariant;
    ///   nothing is saved in that case
    #[instrument(skip(self, request), fields(interest_rate_id = %id))]
    pub async fn update(
        &self,
        id: InterestRateId,
        request: UpdateInterestRateRequest,
    ) -> Result<InterestRate, InterestRateError> {
        let mut record = self.obtain_by_id(id).await?;

        request.apply_to(&mut record);
        record.id = Some(id);
        record.validate()?;

        let saved = self.repository.save(record).await?;
        info!(rate = %saved.interest_rate, "Interest rate updated");
        Ok(saved)
    }

    /// Inactivates an interest rate (soft delete)
    ///
    /// Sets the state to `INA` and stamps the end with the current time.
    /// Inactivating an already inactive rate returns it unchanged without
    /// writing to the repository.
    ///
    /// # Errors
    ///
    /// Returns `InterestRateError::NotFound` if no record exists for `id`
    #[instrument(skip(self), fields(interest_rate_id = %id))]
    pub async fn inactivate(&self, id: InterestRateId) -> Result<InterestRate, InterestRateError> {
        let mut record = self.obtain_by_id(id).await?;

        if !record.inactivate(Utc::now()) {
            debug!("Interest rate already inactive");
            return Ok(record);
        }

        let saved = self.repository.save(record).await?;
        info!(end = ?saved.end, "Interest rate inactivated");
        Ok(saved)
    }
}
