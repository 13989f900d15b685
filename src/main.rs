use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use newsletter_signup::{
    app_state::{AppState, WebhookInfo},
    config::AppConfig,
    routes,
    services::{pipeline::SubmissionPipeline, transport::WebhookTransport},
};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing newsletter-signup server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle =
        routes::metrics::install_recorder().expect("Failed to install Prometheus metrics recorder");

    tracing::info!(
        url = %config.webhook_url,
        method = %config.webhook_method,
        timeout_ms = config.timeout_ms,
        retry_attempts = config.retry_attempts,
        "Initializing webhook transport"
    );
    let transport = WebhookTransport::new(&config.webhook_url, config.webhook_method)
        .expect("Failed to initialize webhook transport");

    let pipeline = SubmissionPipeline::new(Arc::new(transport), config.pipeline());
    let state = AppState::new(
        pipeline,
        WebhookInfo {
            url: config.webhook_url.clone(),
            method: config.webhook_method,
        },
    );

    let app = routes::api_router(state)
        // Prometheus metrics endpoint (separate state)
        .merge(routes::metrics::metrics_router(prometheus_handle))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(64 * 1024)); // 64 KB limit

    tracing::info!("Starting newsletter-signup on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
