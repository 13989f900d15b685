use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which check rejected a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ValidationKind {
    Required,
    MinLength,
    MaxLength,
    Pattern,
    Options,
    KeywordLength,
    KeywordCount,
    EmailFormat,
    EmailLength,
    EmailTypo,
}

/// Verdict for a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ValidationKind>,
    /// Non-blocking hint; never turns a valid result invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
            kind: None,
            suggestion: None,
        }
    }

    pub fn valid_with_suggestion(suggestion: impl Into<String>) -> Self {
        Self {
            suggestion: Some(suggestion.into()),
            ..Self::valid()
        }
    }

    pub fn invalid(kind: ValidationKind, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
            kind: Some(kind),
            suggestion: None,
        }
    }
}

/// Aggregated verdict for a whole form. Only failing fields are listed, in
/// the order they were checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidationResult {
    pub is_valid: bool,
    pub errors: IndexMap<String, ValidationResult>,
    pub field_count: usize,
    pub error_count: usize,
}

impl FormValidationResult {
    /// Message of the first failing field, for single-line status displays.
    pub fn first_message(&self) -> Option<&str> {
        self.errors.values().next().map(|r| r.message.as_str())
    }
}
