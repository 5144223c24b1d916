//! Currency listing and conversion routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use pivot_core::currency::ConversionError;
use pivot_shared::types::Money;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::{AppState, error::ApiError};

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currencies", get(get_supported_currencies))
        .route("/currencies/convert", post(convert))
}

/// Response listing the supported currencies.
#[derive(Debug, Serialize, Deserialize)]
pub struct SupportedCurrenciesResponse {
    /// Currency codes in lexicographic order.
    pub currency_codes: Vec<String>,
}

/// Request body for a conversion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertRequest {
    /// Amount to convert.
    pub from: Money,
    /// Code of the currency to convert into.
    pub to_code: String,
}

/// GET `/currencies` - List supported currency codes.
async fn get_supported_currencies(State(state): State<AppState>) -> Json<SupportedCurrenciesResponse> {
    info!("Getting supported currencies");

    let currency_codes: Vec<String> = state
        .currency
        .supported_currencies()
        .into_iter()
        .map(ToString::to_string)
        .collect();

    info!(count = currency_codes.len(), "Getting supported currencies completed");
    Json(SupportedCurrenciesResponse { currency_codes })
}

/// POST `/currencies/convert` - Convert an amount into another currency.
async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<Money>, ApiError> {
    let Json(request) = payload?;
    info!(
        from = %request.from.currency_code,
        to = %request.to_code,
        "Received conversion request"
    );

    match state.currency.convert(&request.from, &request.to_code) {
        Ok(result) => {
            info!(from = %request.from, result = %result, "Conversion request successful");
            Ok(Json(result))
        }
        Err(e) => {
            if matches!(e, ConversionError::InvalidRate { .. }) {
                error!(error = %e, "Conversion request failed");
            } else {
                warn!(error = %e, "Conversion request rejected");
            }
            Err(e.into())
        }
    }
}
