use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::models::validation::FormValidationResult;

/// Body delivered to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub query: String,
    pub address: String,
    pub language: String,
    pub timestamp: String,
    pub request_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
}

/// User-facing failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    Network,
    Timeout,
    ServerError,
    ClientError,
    CorsBlocked,
    Unknown,
}

/// Result of one call to the submission pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    #[serde(rename_all = "camelCase")]
    Success {
        message: String,
        data: serde_json::Value,
        request_id: u64,
    },
    #[serde(rename_all = "camelCase")]
    Failure {
        message: String,
        error: String,
        category: ErrorCategory,
        request_id: u64,
        attempts: u32,
    },
    /// Rejected before any network activity.
    #[serde(rename_all = "camelCase")]
    Invalid {
        message: String,
        validation: FormValidationResult,
    },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Success { message, .. }
            | SubmissionOutcome::Failure { message, .. }
            | SubmissionOutcome::Invalid { message, .. } => message,
        }
    }

    pub fn request_id(&self) -> Option<u64> {
        match self {
            SubmissionOutcome::Success { request_id, .. }
            | SubmissionOutcome::Failure { request_id, .. } => Some(*request_id),
            SubmissionOutcome::Invalid { .. } => None,
        }
    }

    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            SubmissionOutcome::Failure { category, .. } => Some(*category),
            _ => None,
        }
    }
}
