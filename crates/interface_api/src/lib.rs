//! HTTP API Layer
//!
//! This crate provides the REST API for the interest rate catalogue using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one per catalogue operation plus health probes
//! - **Middleware**: JWT authentication and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: domain errors and extractor rejections rendered as
//!   `{ "error", "message" }`
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let adapter = Arc::new(PostgresInterestRateAdapter::new(pool));
//! let app = create_router(AppState::new(adapter, config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    middleware as axum_middleware,
};
use core_kernel::HealthCheckable;
use domain_product::{InterestRateRepository, InterestRateService};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use crate::config::ApiConfig;
use crate::middleware::{auth_middleware, audit_middleware};
use crate::handlers::{health, interest_rate};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: InterestRateService,
    pub health: Arc<dyn HealthCheckable>,
    pub config: ApiConfig,
}

impl AppState {
    /// Builds the state around a storage adapter
    ///
    /// The same adapter backs the service and the readiness probe.
    pub fn new<R>(repository: Arc<R>, config: ApiConfig) -> Self
    where
        R: InterestRateRepository + HealthCheckable,
    {
        let health: Arc<dyn HealthCheckable> = repository.clone();
        Self {
            service: InterestRateService::new(repository),
            health,
            config,
        }
    }
}

/// Creates the main API router
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Protected API routes
    let api_routes = Router::new()
        .route(
            "/interest-rates",
            get(interest_rate::list_interest_rates).post(interest_rate::create_interest_rate),
        )
        .route(
            "/interest-rates/:id",
            get(interest_rate::get_interest_rate)
                .put(interest_rate::update_interest_rate)
                .delete(interest_rate::inactivate_interest_rate),
        )
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
