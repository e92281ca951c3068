//! Interest rate handlers

use axum::{extract::State, http::StatusCode, Extension, Json};
use core_kernel::InterestRateId;
use validator::Validate;

use crate::auth::{permissions, require_role, Claims};
use crate::dto::interest_rate::*;
use crate::extract::{ApiJson, ApiPath};
use crate::{error::ApiError, AppState};

/// Lists active interest rates
pub async fn list_interest_rates(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<InterestRateResponse>>, ApiError> {
    require_role(&claims, permissions::INTEREST_RATE_READ)?;

    let rates = state.service.list_all_actives().await?;
    Ok(Json(rates.into_iter().map(InterestRateResponse::from).collect()))
}

/// Gets an interest rate by ID
pub async fn get_interest_rate(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<InterestRateResponse>, ApiError> {
    require_role(&claims, permissions::INTEREST_RATE_READ)?;

    let rate = state.service.obtain_by_id(InterestRateId::new(id)).await?;
    Ok(Json(rate.into()))
}

/// Creates a new active interest rate
pub async fn create_interest_rate(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiJson(request): ApiJson<CreateInterestRateDto>,
) -> Result<(StatusCode, Json<InterestRateResponse>), ApiError> {
    require_role(&claims, permissions::INTEREST_RATE_WRITE)?;
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let rate = state.service.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(rate.into())))
}

/// Updates an interest rate
pub async fn update_interest_rate(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<UpdateInterestRateDto>,
) -> Result<Json<InterestRateResponse>, ApiError> {
    require_role(&claims, permissions::INTEREST_RATE_WRITE)?;
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let rate = state
        .service
        .update(InterestRateId::new(id), request.into())
        .await?;
    Ok(Json(rate.into()))
}

/// Inactivates an interest rate
///
/// Records are never removed; the response is the inactivated record.
pub async fn inactivate_interest_rate(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<InterestRateResponse>, ApiError> {
    require_role(&claims, permissions::INTEREST_RATE_WRITE)?;

    let rate = state.service.inactivate(InterestRateId::new(id)).await?;
    Ok(Json(rate.into()))
}
