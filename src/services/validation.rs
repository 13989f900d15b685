use indexmap::IndexMap;
use tracing::debug;

use crate::models::form::{FormInput, Language};
use crate::models::validation::{FormValidationResult, ValidationKind, ValidationResult};
use crate::services::messages::{messages, Messages};
use crate::services::rules::{
    self, FieldRule, SemanticCheck, DOMAIN_CORRECTIONS, EMAIL_MAX_LOCAL, KEYWORD_MAX_COUNT,
    KEYWORD_MAX_TOKEN, KEYWORD_MIN_TOKEN, SORTING_KEYWORDS, SORTING_SUGGEST_AFTER, TYPO_DOMAINS,
};

/// Stateless interpreter over the static rule table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a single field value.
    ///
    /// Checks run in order and stop at the first failure:
    /// - Required (empty or whitespace-only)
    /// - Trimmed length bounds
    /// - Character-class pattern
    /// - Allowed options
    /// - Field-specific semantic check
    ///
    /// Fields without a rule always pass.
    pub fn validate_field(&self, field: &str, value: &str, language: Language) -> ValidationResult {
        match rules::rule_for(field) {
            Some(rule) => evaluate(rule, value, messages(language)),
            None => ValidationResult::valid(),
        }
    }

    /// Validate arbitrary field/value pairs and aggregate the verdicts.
    pub fn validate_fields<'a, I>(&self, fields: I, language: Language) -> FormValidationResult
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut errors = IndexMap::new();
        let mut field_count = 0;

        for (field, value) in fields {
            field_count += 1;
            let result = self.validate_field(field, value, language);
            if !result.is_valid {
                debug!(field, kind = ?result.kind, "Field failed validation");
                errors.insert(field.to_string(), result);
            }
        }

        FormValidationResult {
            is_valid: errors.is_empty(),
            error_count: errors.len(),
            errors,
            field_count,
        }
    }

    pub fn validate_form(&self, form: &FormInput, language: Language) -> FormValidationResult {
        self.validate_fields(form.fields(), language)
    }

    /// Non-blocking hints for improving an input value.
    pub fn suggestions(&self, field: &str, value: &str, language: Language) -> Vec<String> {
        let msgs = messages(language);
        let mut suggestions = Vec::new();

        match field {
            "keyword" => {
                if keyword_tokens(value).len() == 1 {
                    suggestions.push(msgs.keyword_separator_hint.to_string());
                }
            }
            "email" => {
                let domain = value.trim().split('@').nth(1);
                if let Some((_, intended)) = domain.and_then(|domain| {
                    DOMAIN_CORRECTIONS.iter().find(|(typo, _)| *typo == domain)
                }) {
                    suggestions.push(msgs.format_did_you_mean(intended));
                }
            }
            "sorting" => {
                if value.trim().chars().count() < 5 {
                    suggestions.push(msgs.sorting_suggestion.to_string());
                }
            }
            _ => {}
        }

        suggestions
    }
}

/// Run one rule against a value. Checks stop at the first failure.
fn evaluate(rule: &FieldRule, value: &str, msgs: &Messages) -> ValidationResult {
    let trimmed = value.trim();

    // ── Required ─────────────────────────────────────────────────────
    if trimmed.is_empty() {
        return if rule.required {
            ValidationResult::invalid(ValidationKind::Required, msgs.required)
        } else {
            ValidationResult::valid()
        };
    }

    // ── Length bounds ────────────────────────────────────────────────
    let length = trimmed.chars().count();
    if let Some(min) = rule.min_length {
        if length < min {
            return ValidationResult::invalid(ValidationKind::MinLength, msgs.format_min_length(min));
        }
    }
    if let Some(max) = rule.max_length {
        if length > max {
            return ValidationResult::invalid(ValidationKind::MaxLength, msgs.format_max_length(max));
        }
    }

    // ── Pattern ──────────────────────────────────────────────────────
    if let Some(pattern) = rule.pattern {
        if !pattern.is_match(trimmed) {
            return ValidationResult::invalid(ValidationKind::Pattern, pattern_message(rule, msgs));
        }
    }

    // ── Options ──────────────────────────────────────────────────────
    if let Some(options) = rule.options {
        if !options.contains(&trimmed) {
            return ValidationResult::invalid(ValidationKind::Options, msgs.options);
        }
    }

    // ── Semantic check ───────────────────────────────────────────────
    match rule.check {
        Some(SemanticCheck::Keyword) => check_keyword(trimmed, msgs),
        Some(SemanticCheck::Email) => check_email(trimmed, msgs),
        Some(SemanticCheck::Sorting) => check_sorting(trimmed, msgs),
        None => ValidationResult::valid(),
    }
}

fn pattern_message(rule: &FieldRule, msgs: &Messages) -> &'static str {
    match rule.check {
        Some(SemanticCheck::Email) => msgs.email,
        Some(SemanticCheck::Keyword) => msgs.keyword,
        Some(SemanticCheck::Sorting) => msgs.sorting,
        None => msgs.pattern,
    }
}

fn keyword_tokens(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

fn check_keyword(value: &str, msgs: &Messages) -> ValidationResult {
    let tokens = keyword_tokens(value);

    if tokens.is_empty() {
        return ValidationResult::invalid(ValidationKind::Required, msgs.required);
    }

    if tokens.len() > KEYWORD_MAX_COUNT {
        return ValidationResult::invalid(ValidationKind::KeywordCount, msgs.keyword_count);
    }

    for token in &tokens {
        let length = token.chars().count();
        if length < KEYWORD_MIN_TOKEN {
            return ValidationResult::invalid(ValidationKind::KeywordLength, msgs.keyword_too_short);
        }
        if length > KEYWORD_MAX_TOKEN {
            return ValidationResult::invalid(ValidationKind::KeywordLength, msgs.keyword_too_long);
        }
    }

    ValidationResult::valid()
}

fn check_email(value: &str, msgs: &Messages) -> ValidationResult {
    if !rules::FieldPattern::Email.is_match(value) {
        return ValidationResult::invalid(ValidationKind::EmailFormat, msgs.email);
    }

    let Some((local, domain)) = value.split_once('@') else {
        return ValidationResult::invalid(ValidationKind::EmailFormat, msgs.email);
    };

    if local.chars().count() > EMAIL_MAX_LOCAL {
        return ValidationResult::invalid(ValidationKind::EmailLength, msgs.email_too_long);
    }

    if value.contains("..") || !domain.contains('.') {
        return ValidationResult::invalid(ValidationKind::EmailFormat, msgs.email);
    }

    if TYPO_DOMAINS.contains(&domain) {
        return ValidationResult::invalid(ValidationKind::EmailTypo, msgs.email_typo);
    }

    ValidationResult::valid()
}

fn check_sorting(value: &str, msgs: &Messages) -> ValidationResult {
    let length = value.chars().count();
    if length < 2 {
        return ValidationResult::invalid(ValidationKind::MinLength, msgs.sorting_too_short);
    }
    if length > 50 {
        return ValidationResult::invalid(ValidationKind::MaxLength, msgs.sorting_too_long);
    }

    let lowered = value.to_lowercase();
    let relevant = SORTING_KEYWORDS.iter().any(|kw| lowered.contains(kw));
    if !relevant && length > SORTING_SUGGEST_AFTER {
        return ValidationResult::valid_with_suggestion(msgs.sorting_examples);
    }

    ValidationResult::valid()
}
