use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::models::form::{FormInput, Language};

/// Body of `POST /api/v1/subscribe` and `POST /api/v1/validate`.
///
/// The bounds here only cap payload size; field rules are applied by the
/// validator so that messages stay localized.
#[derive(Debug, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[garde(length(max = 1000))]
    pub keyword: String,

    #[garde(length(max = 1000))]
    pub email: String,

    /// Language code; unknown codes fall back to Korean.
    #[garde(skip)]
    pub language: Option<String>,

    #[garde(length(max = 1000))]
    pub sorting: Option<String>,
}

impl SubscribeRequest {
    pub fn language(&self) -> Language {
        self.language
            .as_deref()
            .map(Language::from_code)
            .unwrap_or_default()
    }

    pub fn into_form(self) -> FormInput {
        FormInput {
            language: self.language(),
            keyword: self.keyword,
            email: self.email,
            sorting: self.sorting,
        }
    }
}

/// Query of `GET /api/v1/suggestions`.
#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    pub field: String,
    #[serde(default)]
    pub value: String,
    pub language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
