//! Localized message tables for validation and submission outcomes.

use crate::models::form::Language;
use crate::models::submission::ErrorCategory;

/// All user-facing strings for one language.
#[derive(Debug)]
pub struct Messages {
    pub required: &'static str,
    /// Contains a `{min}` placeholder.
    pub min_length: &'static str,
    /// Contains a `{max}` placeholder.
    pub max_length: &'static str,
    pub pattern: &'static str,
    pub email: &'static str,
    pub keyword: &'static str,
    pub sorting: &'static str,
    pub options: &'static str,
    pub keyword_too_short: &'static str,
    pub keyword_too_long: &'static str,
    pub keyword_count: &'static str,
    pub email_too_long: &'static str,
    pub email_typo: &'static str,
    pub sorting_too_short: &'static str,
    pub sorting_too_long: &'static str,
    pub sorting_examples: &'static str,
    pub sorting_suggestion: &'static str,
    pub keyword_separator_hint: &'static str,
    /// Contains a `{domain}` placeholder.
    pub did_you_mean: &'static str,
    /// Contains a `{detail}` placeholder.
    pub invalid_form: &'static str,
    pub subscribed: &'static str,
    pub network: &'static str,
    pub timeout: &'static str,
    pub server_error: &'static str,
    pub client_error: &'static str,
    pub cors_blocked: &'static str,
    pub unknown: &'static str,
}

pub static KO: Messages = Messages {
    required: "이 필드는 필수입니다.",
    min_length: "{min}자 이상 입력해주세요.",
    max_length: "{max}자 이하로 입력해주세요.",
    pattern: "올바른 형식으로 입력해주세요.",
    email: "유효한 이메일 주소를 입력해주세요.",
    keyword: "키워드는 한글, 영문, 숫자, 쉼표만 사용 가능합니다.",
    sorting: "정렬 기준은 한글, 영문, 숫자만 사용 가능합니다.",
    options: "올바른 옵션을 선택해주세요.",
    keyword_too_short: "각 키워드는 2자 이상이어야 합니다.",
    keyword_too_long: "각 키워드는 20자 이하이어야 합니다.",
    keyword_count: "키워드는 최대 5개까지 입력 가능합니다.",
    email_too_long: "이메일 주소가 너무 깁니다.",
    email_typo: "이메일 도메인을 다시 확인해주세요. (오타가 있을 수 있습니다)",
    sorting_too_short: "정렬 기준을 2자 이상 입력해주세요.",
    sorting_too_long: "정렬 기준을 50자 이하로 입력해주세요.",
    sorting_examples: "예시: 신모델 개발, 투자 동향, 기술 트렌드, 시장 분석 등",
    sorting_suggestion: "예시: 신모델 개발, 투자 동향, 기술 트렌드, 시장 분석, 업계 동향",
    keyword_separator_hint: "여러 키워드를 입력하려면 쉼표(,)로 구분해주세요",
    did_you_mean: "{domain}을(를) 의도하신 건 아닌가요?",
    invalid_form: "입력 오류: {detail}",
    subscribed: "뉴스레터 구독이 성공적으로 등록되었습니다. 곧 이메일을 받으실 수 있습니다.",
    network: "네트워크 연결에 문제가 있습니다. 인터넷 연결을 확인하고 다시 시도해주세요.",
    timeout: "요청 시간이 초과되었습니다. 잠시 후 다시 시도해주세요.",
    server_error: "서버에 일시적인 문제가 발생했습니다. 잠시 후 다시 시도해주세요.",
    client_error: "요청이 올바르지 않습니다. 입력한 정보를 확인해주세요.",
    cors_blocked: "브라우저 보안 정책으로 인해 요청이 차단되었습니다.",
    unknown: "알 수 없는 오류가 발생했습니다. 잠시 후 다시 시도해주세요.",
};

pub static EN: Messages = Messages {
    required: "This field is required.",
    min_length: "Please enter at least {min} characters.",
    max_length: "Please enter no more than {max} characters.",
    pattern: "Please enter a valid format.",
    email: "Please enter a valid email address.",
    keyword: "Keyword can only contain letters, numbers, and commas.",
    sorting: "Sorting criteria can only contain letters, numbers, and spaces.",
    options: "Please select a valid option.",
    keyword_too_short: "Each keyword must be at least 2 characters.",
    keyword_too_long: "Each keyword must be 20 characters or fewer.",
    keyword_count: "You can enter up to 5 keywords.",
    email_too_long: "The email address is too long.",
    email_typo: "Please double-check the email domain. (It may contain a typo)",
    sorting_too_short: "Please enter at least 2 characters for the sorting criteria.",
    sorting_too_long: "Please enter no more than 50 characters for the sorting criteria.",
    sorting_examples: "Examples: new models, investment trends, technology trends, market analysis",
    sorting_suggestion: "Examples: new models, investment trends, technology trends, market analysis, industry trends",
    keyword_separator_hint: "Separate multiple keywords with commas (,)",
    did_you_mean: "Did you mean {domain}?",
    invalid_form: "Input error: {detail}",
    subscribed: "Your newsletter subscription was registered. You will receive an email shortly.",
    network: "There is a problem with the network connection. Please check your connection and try again.",
    timeout: "The request timed out. Please try again in a moment.",
    server_error: "The server is temporarily unavailable. Please try again in a moment.",
    client_error: "The request was invalid. Please check the information you entered.",
    cors_blocked: "The request was blocked by the browser security policy.",
    unknown: "An unknown error occurred. Please try again in a moment.",
};

pub fn messages(language: Language) -> &'static Messages {
    match language {
        Language::Ko => &KO,
        Language::En => &EN,
    }
}

impl Messages {
    pub fn category(&self, category: ErrorCategory) -> &'static str {
        match category {
            ErrorCategory::Network => self.network,
            ErrorCategory::Timeout => self.timeout,
            ErrorCategory::ServerError => self.server_error,
            ErrorCategory::ClientError => self.client_error,
            ErrorCategory::CorsBlocked => self.cors_blocked,
            ErrorCategory::Unknown => self.unknown,
        }
    }

    pub fn format_min_length(&self, min: usize) -> String {
        self.min_length.replace("{min}", &min.to_string())
    }

    pub fn format_max_length(&self, max: usize) -> String {
        self.max_length.replace("{max}", &max.to_string())
    }

    pub fn format_invalid_form(&self, detail: &str) -> String {
        self.invalid_form.replace("{detail}", detail)
    }

    pub fn format_did_you_mean(&self, domain: &str) -> String {
        self.did_you_mean.replace("{domain}", domain)
    }
}
