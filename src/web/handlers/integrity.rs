// Submission integrity handlers.
//
// POST /api/integrity — score paste telemetry and return the review prompt
// POST /api/review    — same, then forward the prompt to the reviewer
//
// /api/review returns 503 when no reviewer is configured and 502 when the
// reviewer call itself fails.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{info, warn};

use crate::integrity::prompt::evaluate_submission;
use crate::models::SubmissionTelemetry;
use crate::web::{api_error, AppState};

/// POST /api/integrity
pub async fn evaluate(
    State(state): State<AppState>,
    Json(body): Json<SubmissionTelemetry>,
) -> impl IntoResponse {
    let evaluation = evaluate_submission(&body, &state.config.thresholds);
    info!(
        paste_ratio = evaluation.integrity.paste_ratio,
        flagged = evaluation.integrity.is_flagged,
        "Evaluated submission"
    );
    Json(evaluation)
}

/// POST /api/review
pub async fn review(
    State(state): State<AppState>,
    Json(body): Json<SubmissionTelemetry>,
) -> Response {
    let Some(reviewer) = state.reviewer.clone() else {
        return api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "No reviewer configured. Set REVIEW_API_KEY.",
        );
    };

    let evaluation = evaluate_submission(&body, &state.config.thresholds);

    match reviewer.review(&evaluation.prompt).await {
        Ok(feedback) => Json(serde_json::json!({
            "integrity": evaluation.integrity,
            "feedback": feedback,
        }))
        .into_response(),
        Err(e) => {
            warn!(error = %e, "Review request failed");
            api_error(StatusCode::BAD_GATEWAY, "Reviewer request failed")
        }
    }
}
