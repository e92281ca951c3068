//! Interest rate repository implementation
//!
//! This module provides database access for the `interest_rate` table.
//! State is stored as its three-letter code (`ACT` / `INA`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::error::DatabaseError;

const SELECT_COLUMNS: &str = "id, name, interest_rate, state, start_date, end_date";

/// Repository for the interest rate catalogue table
#[derive(Debug, Clone)]
pub struct InterestRateRepository {
    pool: PgPool,
}

impl InterestRateRepository {
    /// Creates a new InterestRateRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves every interest rate with the given state code, ordered by id
    pub async fn find_by_state(&self, state: &str) -> Result<Vec<InterestRateRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, InterestRateRow>(&format!(
            "SELECT {} FROM interest_rate WHERE state = $1 ORDER BY id",
            SELECT_COLUMNS
        ))
        .bind(state)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Retrieves an interest rate by id, `None` when absent
    pub async fn find_by_id(&self, id: i32) -> Result<Option<InterestRateRow>, DatabaseError> {
        let row = sqlx::query_as::<_, InterestRateRow>(&format!(
            "SELECT {} FROM interest_rate WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Inserts a new interest rate, letting the database assign the id
    pub async fn insert(&self, new_rate: NewInterestRate) -> Result<InterestRateRow, DatabaseError> {
        let row = sqlx::query_as::<_, InterestRateRow>(&format!(
            r#"
            INSERT INTO interest_rate (name, interest_rate, state, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            SELECT_COLUMNS
        ))
        .bind(&new_rate.name)
        .bind(new_rate.interest_rate)
        .bind(&new_rate.state)
        .bind(new_rate.start_date)
        .bind(new_rate.end_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Overwrites every mutable column of an existing interest rate
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has the given id
    pub async fn update(&self, row: InterestRateRow) -> Result<InterestRateRow, DatabaseError> {
        let updated = sqlx::query_as::<_, InterestRateRow>(&format!(
            r#"
            UPDATE interest_rate
            SET name = $2, interest_rate = $3, state = $4, start_date = $5, end_date = $6
            WHERE id = $1
            RETURNING {}
            "#,
            SELECT_COLUMNS
        ))
        .bind(row.id)
        .bind(&row.name)
        .bind(row.interest_rate)
        .bind(&row.state)
        .bind(row.start_date)
        .bind(row.end_date)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("InterestRate", row.id))?;

        Ok(updated)
    }
}

/// Database row for an interest rate
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct InterestRateRow {
    pub id: i32,
    pub name: Option<String>,
    pub interest_rate: Decimal,
    pub state: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Data for inserting a new interest rate
#[derive(Debug, Clone)]
pub struct NewInterestRate {
    pub name: Option<String>,
    pub interest_rate: Decimal,
    pub state: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}
