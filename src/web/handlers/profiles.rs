// Profile handlers.
//
// POST /api/profiles/sanitize        — one AuthorProfile in, one sanitized out
// POST /api/profiles/sanitize-batch  — array in, array out, same order
// GET  /api/avatar/{id}              — emoji avatar for an id
//
// Bodies contain PII, so nothing here logs profile fields.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::models::{AuthorId, AuthorProfile};
use crate::sanitize::{emoji, profile};
use crate::web::AppState;

/// POST /api/profiles/sanitize
pub async fn sanitize_one(
    State(state): State<AppState>,
    Json(body): Json<AuthorProfile>,
) -> impl IntoResponse {
    Json(profile::sanitize_profile(&body, &state.config.avatar_pool))
}

/// POST /api/profiles/sanitize-batch
pub async fn sanitize_batch(
    State(state): State<AppState>,
    Json(body): Json<Vec<AuthorProfile>>,
) -> impl IntoResponse {
    let profiles = profile::sanitize_profiles(&body, &state.config.avatar_pool);
    Json(serde_json::json!({
        "total": profiles.len(),
        "profiles": profiles,
    }))
}

/// GET /api/avatar/{id} — numeric path segments are treated as numeric ids.
pub async fn get_avatar(State(state): State<AppState>, Path(raw): Path<String>) -> impl IntoResponse {
    let id = AuthorId::parse(&raw);
    let avatar = emoji::assign_emoji(&id, &state.config.avatar_pool);
    Json(serde_json::json!({
        "id": id,
        "avatar": avatar,
    }))
}
