use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Language used for validation and outcome messages.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    /// Parse a language code, falling back to Korean for anything unknown.
    pub fn from_code(code: &str) -> Self {
        code.trim().parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// Raw values collected by the signup form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    pub keyword: String,
    pub email: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting: Option<String>,
}

impl FormInput {
    pub fn new(keyword: impl Into<String>, email: impl Into<String>, language: Language) -> Self {
        Self {
            keyword: keyword.into(),
            email: email.into(),
            language,
            sorting: None,
        }
    }

    pub fn with_sorting(mut self, sorting: impl Into<String>) -> Self {
        self.sorting = Some(sorting.into());
        self
    }

    /// Field name/value pairs in evaluation order.
    pub fn fields(&self) -> Vec<(&str, &str)> {
        let mut fields = vec![
            ("keyword", self.keyword.as_str()),
            ("email", self.email.as_str()),
            ("language", self.language.as_str()),
        ];
        if let Some(sorting) = &self.sorting {
            fields.push(("sorting", sorting.as_str()));
        }
        fields
    }
}
