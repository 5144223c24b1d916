//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - Currency listing and conversion routes
//! - Payment charge route delegating to a pluggable processor
//! - Health check route backed by a shared serving flag
//! - Mapping of domain errors to JSON error responses

pub mod error;
pub mod routes;
pub mod status;

#[cfg(test)]
mod test_support;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use pivot_core::currency::CurrencyService;
use pivot_core::payment::ChargeProcessor;
use pivot_shared::config::ServerConfig;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use status::HealthReporter;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Conversion service over the rate table loaded at startup.
    pub currency: CurrencyService,
    /// Serving flag reported by the health check.
    pub health: HealthReporter,
    /// Charge processor, if one is configured.
    pub payments: Option<Arc<dyn ChargeProcessor>>,
}

impl AppState {
    /// Creates state with no charge processor.
    #[must_use]
    pub fn new(currency: CurrencyService, health: HealthReporter) -> Self {
        Self {
            currency,
            health,
            payments: None,
        }
    }

    /// Attaches a charge processor.
    #[must_use]
    pub fn with_payments(mut self, processor: Arc<dyn ChargeProcessor>) -> Self {
        self.payments = Some(processor);
        self
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(RequestBodyLimitLayer::new(server.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
