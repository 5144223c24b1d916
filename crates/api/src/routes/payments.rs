//! Payment charge route.
//!
//! The charge itself is performed by whatever [`ChargeProcessor`] the server
//! was started with. Without one, every charge is answered as unavailable.
//!
//! [`ChargeProcessor`]: pivot_core::payment::ChargeProcessor

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use pivot_shared::{
    AppError,
    types::{ChargeRequest, ChargeResponse},
};
use tracing::{info, warn};

use crate::{AppState, error::ApiError};

/// Creates the payment routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/payments/charge", post(charge))
}

/// POST `/payments/charge` - Charge an amount to a card.
///
/// The `pivot` binary starts without a processor, so out of the box this
/// answers 503 `UNAVAILABLE`. Embedders attach one with
/// [`AppState::with_payments`].
async fn charge(
    State(state): State<AppState>,
    payload: Result<Json<ChargeRequest>, JsonRejection>,
) -> Result<Json<ChargeResponse>, ApiError> {
    let Json(request) = payload?;
    // Only the amount is logged; card data stays out of the logs.
    info!(amount = %request.amount, "Charge request received");

    let Some(processor) = state.payments.as_ref() else {
        warn!("Charge requested but no processor is configured");
        return Err(AppError::Unavailable("No charge processor configured".to_string()).into());
    };

    match processor.charge(&request).await {
        Ok(response) => {
            info!(
                transaction_id = %response.transaction_id,
                "Charge request successful"
            );
            Ok(Json(response))
        }
        Err(e) => {
            warn!(error = %e, "Charge request failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use axum::http::StatusCode;
    use pivot_core::payment::{ChargeError, ChargeProcessor};
    use serde_json::{Value, json};

    use super::*;
    use crate::test_support::{body_json, post_json, router, router_with_payments, serving_state};

    /// Approves positive amounts and counts calls.
    #[derive(Default)]
    struct CountingProcessor {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ChargeProcessor for CountingProcessor {
        async fn charge(&self, request: &ChargeRequest) -> Result<ChargeResponse, ChargeError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if request.amount.is_negative() || request.amount.is_zero() {
                return Err(ChargeError::Rejected("amount must be positive".into()));
            }
            Ok(ChargeResponse {
                transaction_id: format!("tx-{n}"),
            })
        }
    }

    fn charge_body(units: i64) -> Value {
        json!({
            "amount": {"currency_code": "USD", "units": units, "nanos": 0},
            "credit_card": {
                "credit_card_number": "4432801561520454",
                "credit_card_cvv": 672,
                "credit_card_expiration_year": 2030,
                "credit_card_expiration_month": 1
            }
        })
    }

    #[tokio::test]
    async fn test_charge_without_processor() {
        let response = post_json(
            router(serving_state()),
            "/api/v1/payments/charge",
            &charge_body(10),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["error"], "UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_charge_success() {
        let processor = Arc::new(CountingProcessor::default());
        let response = post_json(
            router_with_payments(processor.clone()),
            "/api/v1/payments/charge",
            &charge_body(10),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"transaction_id": "tx-0"})
        );
        assert_eq!(processor.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_charge_rejected() {
        let processor = Arc::new(CountingProcessor::default());
        let response = post_json(
            router_with_payments(processor),
            "/api/v1/payments/charge",
            &charge_body(-5),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["message"],
            "Invalid argument: Charge rejected: amount must be positive"
        );
    }

    #[tokio::test]
    async fn test_charge_missing_card() {
        let processor = Arc::new(CountingProcessor::default());
        let response = post_json(
            router_with_payments(processor.clone()),
            "/api/v1/payments/charge",
            &json!({"amount": {"currency_code": "USD", "units": 1}}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(processor.calls.load(Ordering::SeqCst), 0);
    }
}
