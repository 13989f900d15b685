use axum::routing::{get, post};
use axum::Router;

use crate::app_state::AppState;

pub mod health;
pub mod metrics;
pub mod subscribe;

/// API routes without the metrics endpoint or middleware layers.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/validate", post(subscribe::validate_form))
        .route("/api/v1/subscribe", post(subscribe::submit_subscription))
        .route("/api/v1/suggestions", get(subscribe::suggestions))
        .with_state(state)
}
