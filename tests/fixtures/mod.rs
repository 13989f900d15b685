//! Form fixtures shared by the integration tests

#![allow(dead_code)]

use newsletter_signup::models::form::{FormInput, Language};

pub fn valid_form() -> FormInput {
    FormInput::new("인공지능, 반도체", "reader@example.com", Language::Ko)
}

pub fn valid_form_en() -> FormInput {
    FormInput::new("AI, robotics", "reader@example.com", Language::En)
}

/// Typo domain: rejected before any network call.
pub fn invalid_form() -> FormInput {
    FormInput::new("AI", "reader@gmial.com", Language::En)
}

/// Keyword inputs with 1 to 5 tokens of 2 to 20 characters each.
pub const VALID_KEYWORDS: &[&str] = &[
    "AI",
    "인공지능",
    "AI, 반도체",
    "rust, go, zig",
    "전기차, 배터리, 자율주행, 로봇, 우주",
    "machine learning, data-centers",
    "GPT 5.0",
    "abcdefghijklmnopqrst",
];
