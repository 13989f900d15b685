use newsletter_signup::{
    config::AppConfig,
    services::{pipeline::SubmissionPipeline, transport::WebhookTransport},
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Send one test payload to the configured webhook and report whether it answered.
#[tokio::main]
async fn main() -> ExitCode {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = AppConfig::from_env().expect("Failed to load configuration");

    tracing::info!(url = %config.webhook_url, method = %config.webhook_method, "Probing webhook");

    let transport = WebhookTransport::new(&config.webhook_url, config.webhook_method)
        .expect("Failed to initialize webhook transport");
    let pipeline = SubmissionPipeline::new(Arc::new(transport), config.pipeline());

    let start = std::time::Instant::now();
    let reachable = pipeline.test_connection().await;

    if reachable {
        tracing::info!(
            latency_ms = start.elapsed().as_millis() as u64,
            "Webhook reachable"
        );
        ExitCode::SUCCESS
    } else {
        tracing::error!("Webhook unreachable");
        ExitCode::FAILURE
    }
}
