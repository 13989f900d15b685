use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;

use crate::app_state::AppState;
use crate::models::api::{ErrorResponse, SubscribeRequest, SuggestionsQuery};
use crate::models::form::Language;
use crate::models::submission::SubmissionOutcome;
use crate::models::validation::FormValidationResult;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

/// POST /api/v1/validate — Validate a form without submitting it.
pub async fn validate_form(
    State(state): State<AppState>,
    Json(request): Json<SubscribeRequest>,
) -> Result<Json<FormValidationResult>, ApiError> {
    request
        .validate()
        .map_err(|e| api_error(StatusCode::PAYLOAD_TOO_LARGE, e.to_string()))?;

    let language = request.language();
    let form = request.into_form();
    Ok(Json(state.validator.validate_form(&form, language)))
}

/// POST /api/v1/subscribe — Validate and deliver a signup to the webhook.
///
/// A second request for an address whose submission is still running is
/// rejected with 409 rather than queued.
pub async fn submit_subscription(
    State(state): State<AppState>,
    Json(request): Json<SubscribeRequest>,
) -> Result<(StatusCode, Json<SubmissionOutcome>), ApiError> {
    request
        .validate()
        .map_err(|e| api_error(StatusCode::PAYLOAD_TOO_LARGE, e.to_string()))?;

    let form = request.into_form();
    let key = form.email.trim().to_lowercase();

    let Some(_guard) = state.gate.try_begin(&key) else {
        tracing::info!("Submission already in progress for this address");
        return Err(api_error(
            StatusCode::CONFLICT,
            "submission already in progress",
        ));
    };

    let outcome = state.pipeline.submit(&form).await;
    let status = match &outcome {
        SubmissionOutcome::Success { .. } => StatusCode::OK,
        SubmissionOutcome::Invalid { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionOutcome::Failure { .. } => StatusCode::BAD_GATEWAY,
    };

    Ok((status, Json(outcome)))
}

/// GET /api/v1/suggestions — Input improvement hints for one field.
pub async fn suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionsQuery>,
) -> Json<Vec<String>> {
    let language = query
        .language
        .as_deref()
        .map(Language::from_code)
        .unwrap_or_default();

    Json(state.validator.suggestions(&query.field, &query.value, language))
}
