//! Static field rule table.
//!
//! Rules are plain data; `validation` interprets them. Adding a field means
//! adding a row here, not new control flow.

use std::sync::LazyLock;

use regex::Regex;

/// Letters (including Hangul), digits, whitespace, comma, period, hyphen.
static TEXT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9가-힣\s,.-]+$").expect("text pattern compiles"));

/// `local@domain.tld` shape without whitespace.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Character-class pattern a field value must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPattern {
    Text,
    Email,
}

impl FieldPattern {
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            FieldPattern::Text => TEXT_PATTERN.is_match(value),
            FieldPattern::Email => EMAIL_PATTERN.is_match(value),
        }
    }
}

/// Field-specific semantic check run after the generic constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticCheck {
    Keyword,
    Email,
    Sorting,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<FieldPattern>,
    pub options: Option<&'static [&'static str]>,
    pub check: Option<SemanticCheck>,
}

pub const KEYWORD_MIN_TOKEN: usize = 2;
pub const KEYWORD_MAX_TOKEN: usize = 20;
pub const KEYWORD_MAX_COUNT: usize = 5;
pub const EMAIL_MAX_LOCAL: usize = 64;
pub const SORTING_SUGGEST_AFTER: usize = 10;

/// Domains that are almost always a mistyped popular provider.
pub const TYPO_DOMAINS: &[&str] = &["gmail.co", "naver.co", "gmail.om", "gmial.com"];

/// Typo domain → intended domain, used for "did you mean" hints.
pub const DOMAIN_CORRECTIONS: &[(&str, &str)] = &[
    ("gmail.co", "gmail.com"),
    ("naver.co", "naver.com"),
    ("gmial.com", "gmail.com"),
    ("gmai.com", "gmail.com"),
];

/// Sorting criteria that count as meaningful.
pub const SORTING_KEYWORDS: &[&str] = &[
    "신모델", "개발", "투자", "동향", "기술", "시장", "분석", "업계", "트렌드", "전망", "예측",
    "성장", "변화", "혁신", "출시", "발표",
];

pub const LANGUAGE_OPTIONS: &[&str] = &["ko", "en"];

pub static RULES: &[FieldRule] = &[
    FieldRule {
        field: "keyword",
        required: true,
        min_length: Some(2),
        max_length: Some(100),
        pattern: Some(FieldPattern::Text),
        options: None,
        check: Some(SemanticCheck::Keyword),
    },
    FieldRule {
        field: "email",
        required: true,
        min_length: None,
        max_length: Some(254),
        pattern: Some(FieldPattern::Email),
        options: None,
        check: Some(SemanticCheck::Email),
    },
    FieldRule {
        field: "sorting",
        required: true,
        min_length: Some(2),
        max_length: Some(50),
        pattern: Some(FieldPattern::Text),
        options: None,
        check: Some(SemanticCheck::Sorting),
    },
    FieldRule {
        field: "language",
        required: true,
        min_length: None,
        max_length: None,
        pattern: None,
        options: Some(LANGUAGE_OPTIONS),
        check: None,
    },
];

pub fn rule_for(field: &str) -> Option<&'static FieldRule> {
    RULES.iter().find(|rule| rule.field == field)
}
