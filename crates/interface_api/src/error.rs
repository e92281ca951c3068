//! API error handling

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_kernel::PortError;
use domain_product::InterestRateError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::auth::AuthError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiError {
    /// Status code this error is rendered with
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::Unauthorized => "unauthorized",
            ApiError::Forbidden(_) => "forbidden",
            ApiError::Conflict(_) => "conflict",
            ApiError::Internal(_) => "internal_error",
            ApiError::ServiceUnavailable(_) => "service_unavailable",
            ApiError::Validation(_) => "validation_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Unauthorized => "Unauthorized".to_string(),
            ApiError::NotFound(msg)
            | ApiError::Forbidden(msg)
            | ApiError::Conflict(msg)
            | ApiError::Internal(msg)
            | ApiError::ServiceUnavailable(msg)
            | ApiError::Validation(msg) => msg.clone(),
        };

        let body = ErrorResponse {
            error: self.kind().to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<InterestRateError> for ApiError {
    fn from(err: InterestRateError) -> Self {
        match err {
            InterestRateError::NotFound(_) => ApiError::NotFound(err.to_string()),
            InterestRateError::Validation(msg) => ApiError::Validation(msg),
            InterestRateError::Repository(PortError::Conflict { message }) => {
                ApiError::Conflict(message)
            }
            InterestRateError::Repository(port) => {
                error!(error = %port, transient = port.is_transient(), "Repository failure");
                if port.is_transient() {
                    ApiError::ServiceUnavailable(port.to_string())
                } else {
                    ApiError::Internal(port.to_string())
                }
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingPermission(_) => ApiError::Forbidden(err.to_string()),
            AuthError::InvalidToken | AuthError::TokenExpired => ApiError::Unauthorized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::InterestRateId;

    #[test]
    fn test_domain_errors_map_to_status_codes() {
        let not_found: ApiError = InterestRateError::NotFound(InterestRateId::new(7)).into();
        let validation: ApiError = InterestRateError::validation("Interest rate must not be negative").into();
        let transient: ApiError = InterestRateError::Repository(PortError::connection("down")).into();
        let internal: ApiError = InterestRateError::Repository(PortError::internal("boom")).into();

        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(transient.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_repository_conflict_maps_to_409() {
        let err: ApiError =
            InterestRateError::Repository(PortError::conflict("duplicate key value")).into();

        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.kind(), "conflict");
        assert_eq!(err.to_string(), "Conflict: duplicate key value");
    }

    #[test]
    fn test_not_found_message_names_identifier() {
        let err: ApiError = InterestRateError::NotFound(InterestRateId::new(7)).into();
        assert!(err.to_string().contains("RATE-7"));
    }

    #[test]
    fn test_auth_errors() {
        let forbidden: ApiError = AuthError::MissingPermission("interest_rate:write".to_string()).into();
        let unauthorized: ApiError = AuthError::TokenExpired.into();

        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);
    }
}
