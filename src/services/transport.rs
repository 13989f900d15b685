use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use strum::{Display, EnumString};
use tokio_util::sync::CancellationToken;

use crate::models::submission::{ErrorCategory, SubmissionPayload};

/// How the payload is delivered to the webhook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WebhookMethod {
    /// JSON body.
    #[default]
    Post,
    /// Query parameters, for webhooks that only accept GET.
    Get,
}

/// Delivers a payload to the remote webhook.
///
/// Implementations should stop promptly once `cancel` fires; the pipeline
/// discards any result that arrives after its own timeout.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        payload: &SubmissionPayload,
        cancel: &CancellationToken,
    ) -> Result<serde_json::Value, TransportError>;
}

/// Reqwest-backed transport for workflow-automation webhooks.
pub struct WebhookTransport {
    http: Client,
    url: String,
    method: WebhookMethod,
}

impl WebhookTransport {
    pub fn new(url: impl Into<String>, method: WebhookMethod) -> Result<Self, TransportError> {
        let http = Client::builder()
            .user_agent(concat!("newsletter-signup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            http,
            url: url.into(),
            method,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> WebhookMethod {
        self.method
    }

    async fn deliver(&self, payload: &SubmissionPayload) -> Result<serde_json::Value, TransportError> {
        let request = match self.method {
            WebhookMethod::Post => self
                .http
                .post(&self.url)
                .header(CONTENT_TYPE, "application/json")
                .header(ACCEPT, "application/json")
                .json(payload),
            WebhookMethod::Get => self
                .http
                .get(&self.url)
                .header(ACCEPT, "application/json")
                .query(payload),
        };

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .ok()
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));

        if is_json {
            Ok(response.json().await?)
        } else {
            // Webhooks often answer with plain text or HTML.
            let text = response.text().await?;
            Ok(serde_json::json!({ "message": text, "status": "success" }))
        }
    }
}

#[async_trait]
impl Transport for WebhookTransport {
    async fn send(
        &self,
        payload: &SubmissionPayload,
        cancel: &CancellationToken,
    ) -> Result<serde_json::Value, TransportError> {
        tokio::select! {
            _ = cancel.cancelled() => Err(TransportError::Cancelled),
            result = self.deliver(payload) => result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("network error: {0}")]
    Network(String),

    /// Reported by transports running under a browser origin policy.
    #[error("blocked by CORS policy: {0}")]
    Cors(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("request cancelled")]
    Cancelled,
}

/// Transport-level reqwest failures. The pipeline owns the timeout budget, so
/// no client-side timeout is configured and none is mapped here.
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_body() {
            TransportError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

impl TransportError {
    /// Client errors describe a bad request; repeating it cannot help.
    pub fn is_retryable(&self) -> bool {
        !matches!(self.category(), ErrorCategory::ClientError)
            && !matches!(self, TransportError::Cancelled)
    }

    /// Map to the user-facing category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            TransportError::Status { status, .. } => match status {
                400..=499 => ErrorCategory::ClientError,
                500..=599 => ErrorCategory::ServerError,
                _ => ErrorCategory::Unknown,
            },
            TransportError::Timeout(_) => ErrorCategory::Timeout,
            TransportError::Network(_) => ErrorCategory::Network,
            TransportError::Cors(_) => ErrorCategory::CorsBlocked,
            TransportError::Decode(_) | TransportError::Cancelled => ErrorCategory::Unknown,
        }
    }
}
