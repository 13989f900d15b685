use std::sync::Arc;

use crate::services::{
    gate::SubmissionGate, pipeline::SubmissionPipeline, transport::WebhookMethod,
    validation::Validator,
};

/// Where submissions go, as reported by the health endpoint.
#[derive(Debug, Clone)]
pub struct WebhookInfo {
    pub url: String,
    pub method: WebhookMethod,
}

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub validator: Validator,
    pub pipeline: Arc<SubmissionPipeline>,
    pub gate: SubmissionGate,
    pub webhook: WebhookInfo,
}

impl AppState {
    pub fn new(pipeline: SubmissionPipeline, webhook: WebhookInfo) -> Self {
        Self {
            validator: *pipeline.validator(),
            pipeline: Arc::new(pipeline),
            gate: SubmissionGate::new(),
            webhook,
        }
    }
}
