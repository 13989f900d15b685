use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::sync::Arc;

/// Install the global Prometheus recorder and register metric descriptions.
pub fn install_recorder() -> Result<Arc<PrometheusHandle>, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    describe_metrics();
    Ok(Arc::new(handle))
}

/// Help text for every metric the submission pipeline emits.
pub fn describe_metrics() {
    metrics::describe_counter!(
        "newsletter_submissions_total",
        "Subscriptions that passed validation and were sent to the webhook"
    );
    metrics::describe_counter!(
        "newsletter_submissions_invalid_total",
        "Subscriptions rejected by validation"
    );
    metrics::describe_counter!(
        "newsletter_submission_attempts_total",
        "Individual webhook delivery attempts, including retries"
    );
    metrics::describe_counter!(
        "newsletter_submissions_failed_total",
        "Subscriptions that ended in failure, by category"
    );
    metrics::describe_histogram!(
        "newsletter_submission_duration_seconds",
        "Time from first attempt to final outcome"
    );
}

/// `/metrics` with its own state, mergeable into the API router.
pub fn metrics_router(handle: Arc<PrometheusHandle>) -> Router {
    Router::new()
        .route("/metrics", get(prometheus_metrics))
        .with_state(handle)
}

/// GET /metrics — Prometheus text exposition of the submission counters.
pub async fn prometheus_metrics(State(handle): State<Arc<PrometheusHandle>>) -> impl IntoResponse {
    handle.render()
}
