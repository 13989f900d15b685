use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub webhook: WebhookStatus,
}

#[derive(Serialize)]
pub struct WebhookStatus {
    pub url: String,
    pub method: String,
    pub timeout_ms: u64,
    pub retry_attempts: u32,
    pub last_request_id: u64,
}

/// GET /health — liveness plus the active delivery settings.
///
/// The webhook itself is not contacted; use the `probe` binary for that.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let config = state.pipeline.config();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        webhook: WebhookStatus {
            url: state.webhook.url.clone(),
            method: state.webhook.method.to_string(),
            timeout_ms: config.timeout.as_millis() as u64,
            retry_attempts: config.retry_attempts,
            last_request_id: state.pipeline.last_request_id(),
        },
    })
}
