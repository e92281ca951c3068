//! Interest rate DTOs

use chrono::{DateTime, Utc};
use core_kernel::InterestRateId;
use domain_product::{CreateInterestRateRequest, InterestRate, RateState, UpdateInterestRateRequest};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /interest-rates`
///
/// `state` and `end` are not part of the contract; if a client sends them
/// they are ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInterestRateDto {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    pub interest_rate: Option<Decimal>,
    pub start: Option<DateTime<Utc>>,
}

impl From<CreateInterestRateDto> for CreateInterestRateRequest {
    fn from(dto: CreateInterestRateDto) -> Self {
        CreateInterestRateRequest {
            name: dto.name,
            interest_rate: dto.interest_rate,
            start: dto.start,
        }
    }
}

/// Body of `PUT /interest-rates/:id`
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInterestRateDto {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    pub interest_rate: Option<Decimal>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl From<UpdateInterestRateDto> for UpdateInterestRateRequest {
    fn from(dto: UpdateInterestRateDto) -> Self {
        UpdateInterestRateRequest {
            name: dto.name,
            interest_rate: dto.interest_rate,
            start: dto.start,
            end: dto.end,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InterestRateResponse {
    pub id: Option<InterestRateId>,
    pub name: Option<String>,
    pub interest_rate: Decimal,
    pub state: RateState,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

impl From<InterestRate> for InterestRateResponse {
    fn from(rate: InterestRate) -> Self {
        Self {
            id: rate.id,
            name: rate.name,
            interest_rate: rate.interest_rate,
            state: rate.state,
            start: rate.start,
            end: rate.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_dto_ignores_state_and_end() {
        let dto: CreateInterestRateDto = serde_json::from_value(serde_json::json!({
            "name": "Promo",
            "interest_rate": "0.02",
            "start": "2024-01-01T00:00:00Z",
            "state": "INA",
            "end": "2024-06-01T00:00:00Z"
        }))
        .unwrap();

        let request: CreateInterestRateRequest = dto.into();
        assert_eq!(request.name.as_deref(), Some("Promo"));
        assert_eq!(request.interest_rate, Some(dec!(0.02)));
        assert!(request.start.is_some());
    }

    #[test]
    fn test_name_longer_than_column_is_rejected() {
        let dto = UpdateInterestRateDto {
            name: Some("x".repeat(101)),
            interest_rate: None,
            start: None,
            end: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_response_uses_state_codes() {
        let mut rate = InterestRate::new_active(None, dec!(0.03), Utc::now());
        rate.id = Some(InterestRateId::new(5));

        let json = serde_json::to_value(InterestRateResponse::from(rate)).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["state"], "ACT");
        assert!(json["end"].is_null());
    }
}
