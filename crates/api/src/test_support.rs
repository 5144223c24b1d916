//! Helpers for driving the router in tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header::CONTENT_TYPE};
use http_body_util::BodyExt;
use pivot_core::currency::{CurrencyService, RateTable};
use pivot_core::payment::ChargeProcessor;
use pivot_shared::config::ServerConfig;
use serde_json::Value;
use tower::ServiceExt;

use crate::{AppState, HealthReporter, create_router};

pub const RATES: &str = r#"{"EUR": "1.0", "USD": "1.1305", "JPY": "126.22"}"#;

/// State over the three-currency sample table, already serving.
pub fn serving_state() -> AppState {
    let health = HealthReporter::new();
    health.set_serving();
    AppState::new(
        CurrencyService::new(RateTable::from_json(RATES).unwrap()),
        health,
    )
}

pub fn router(state: AppState) -> Router {
    create_router(state, &ServerConfig::default())
}

pub fn router_with_payments(processor: Arc<dyn ChargeProcessor>) -> Router {
    router(serving_state().with_payments(processor))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
