use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{SecondsFormat, Utc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::models::form::FormInput;
use crate::models::submission::{SubmissionOutcome, SubmissionPayload};
use crate::services::messages::messages;
use crate::services::transport::{Transport, TransportError};
use crate::services::validation::Validator;

/// Timeout and retry budget for webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Upper bound for a single attempt.
    pub timeout: Duration,
    /// Total attempts, including the first one.
    pub retry_attempts: u32,
    /// Base delay; attempt `n` waits `retry_delay * n` before the next one.
    pub retry_delay: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(30_000),
            retry_attempts: 3,
            retry_delay: Duration::from_millis(1_000),
        }
    }
}

/// Terminal delivery failure after the retry loop gave up.
#[derive(Debug)]
struct DeliveryFailure {
    error: TransportError,
    attempts: u32,
    exhausted: bool,
}

/// Validates a form, delivers it to the webhook and normalizes the result.
///
/// Each instance owns its request id counter; ids are strictly increasing for
/// the lifetime of the instance and are never reused.
pub struct SubmissionPipeline {
    transport: Arc<dyn Transport>,
    validator: Validator,
    config: PipelineConfig,
    request_counter: AtomicU64,
    shutdown: CancellationToken,
}

impl SubmissionPipeline {
    pub fn new(transport: Arc<dyn Transport>, config: PipelineConfig) -> Self {
        Self {
            transport,
            validator: Validator::new(),
            config,
            request_counter: AtomicU64::new(0),
            shutdown: CancellationToken::new(),
        }
    }

    /// Tie in-flight calls and backoff sleeps to an external token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Abandon every outstanding submission on this pipeline.
    pub fn cancel(&self) {
        self.shutdown.cancel();
    }

    /// Most recently assigned request id (0 before the first delivery).
    pub fn last_request_id(&self) -> u64 {
        self.request_counter.load(Ordering::SeqCst)
    }

    /// Validate and deliver a form.
    ///
    /// Invalid forms return [`SubmissionOutcome::Invalid`] without touching
    /// the network or consuming a request id.
    pub async fn submit(&self, form: &FormInput) -> SubmissionOutcome {
        let validation = self.validator.validate_form(form, form.language);

        if !validation.is_valid {
            info!(
                error_count = validation.error_count,
                "Submission rejected by validation"
            );
            metrics::counter!("newsletter_submissions_invalid_total").increment(1);
            let message = messages(form.language)
                .format_invalid_form(validation.first_message().unwrap_or_default());
            return SubmissionOutcome::Invalid {
                message,
                validation,
            };
        }

        self.subscribe(form).await
    }

    /// Deliver a form that the caller already validated.
    pub async fn subscribe(&self, form: &FormInput) -> SubmissionOutcome {
        let request_id = self.next_request_id();
        let payload = build_payload(form, request_id);
        let msgs = messages(form.language);

        info!(request_id, language = %form.language, "Starting subscription request");
        metrics::counter!("newsletter_submissions_total").increment(1);

        let start = Instant::now();
        let result = self.deliver_with_retry(&payload).await;
        metrics::histogram!("newsletter_submission_duration_seconds")
            .record(start.elapsed().as_secs_f64());

        match result {
            Ok(data) => {
                info!(request_id, "Subscription request completed");
                SubmissionOutcome::Success {
                    message: msgs.subscribed.to_string(),
                    data,
                    request_id,
                }
            }
            Err(failure) => {
                let category = failure.error.category();
                let error = if failure.exhausted {
                    format!(
                        "request failed after {} attempts: {}",
                        failure.attempts, failure.error
                    )
                } else {
                    failure.error.to_string()
                };

                warn!(
                    request_id,
                    attempts = failure.attempts,
                    category = %category,
                    error = %error,
                    "Subscription request failed"
                );
                metrics::counter!(
                    "newsletter_submissions_failed_total",
                    "category" => category.to_string()
                )
                .increment(1);

                SubmissionOutcome::Failure {
                    message: msgs.category(category).to_string(),
                    error,
                    category,
                    request_id,
                    attempts: failure.attempts,
                }
            }
        }
    }

    /// Send a single probe payload to check that the webhook answers.
    pub async fn test_connection(&self) -> bool {
        let payload = SubmissionPayload {
            query: "test".to_string(),
            address: "test@example.com".to_string(),
            language: "ko".to_string(),
            timestamp: timestamp_now(),
            request_id: 0,
            test: Some(true),
        };

        match self.attempt(&payload).await {
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "Connection test failed");
                false
            }
        }
    }

    fn next_request_id(&self) -> u64 {
        self.request_counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn deliver_with_retry(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<serde_json::Value, DeliveryFailure> {
        let max_attempts = self.config.retry_attempts.max(1);
        let mut attempt = 1;

        loop {
            debug!(
                request_id = payload.request_id,
                attempt,
                max_attempts,
                "Sending webhook request"
            );
            metrics::counter!("newsletter_submission_attempts_total").increment(1);

            let error = match self.attempt(payload).await {
                Ok(data) => return Ok(data),
                Err(error) => error,
            };

            warn!(
                request_id = payload.request_id,
                attempt,
                error = %error,
                "Webhook attempt failed"
            );

            if !error.is_retryable() {
                return Err(DeliveryFailure {
                    error,
                    attempts: attempt,
                    exhausted: false,
                });
            }
            if attempt >= max_attempts {
                return Err(DeliveryFailure {
                    error,
                    attempts: attempt,
                    exhausted: true,
                });
            }

            let delay = backoff_delay(self.config.retry_delay, attempt);
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    return Err(DeliveryFailure {
                        error: TransportError::Cancelled,
                        attempts: attempt,
                        exhausted: false,
                    });
                }
                _ = tokio::time::sleep(delay) => {}
            }

            attempt += 1;
        }
    }

    /// One transport call bounded by the configured timeout.
    async fn attempt(&self, payload: &SubmissionPayload) -> Result<serde_json::Value, TransportError> {
        if self.shutdown.is_cancelled() {
            return Err(TransportError::Cancelled);
        }

        let cancel = self.shutdown.child_token();
        match tokio::time::timeout(self.config.timeout, self.transport.send(payload, &cancel)).await {
            Ok(result) => result,
            Err(_) => {
                // Anything the transport still produces is discarded.
                cancel.cancel();
                Err(TransportError::Timeout(self.config.timeout))
            }
        }
    }
}

/// Linear backoff: the wait after attempt `n` is `base * n`.
pub fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base * attempt
}

fn build_payload(form: &FormInput, request_id: u64) -> SubmissionPayload {
    SubmissionPayload {
        query: form.keyword.trim().to_string(),
        address: form.email.trim().to_string(),
        language: form.language.to_string(),
        timestamp: timestamp_now(),
        request_id,
        test: None,
    }
}

fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
