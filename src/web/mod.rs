// Web server — Axum JSON API for the surrounding platform.
//
// The request layer that owns the author store and the editor calls these
// endpoints to get display-safe profiles and submission integrity data.
// There is no session handling here; the platform's gateway fronts it.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::review::traits::ManuscriptReviewer;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// External reviewer, when REVIEW_API_KEY is configured
    pub reviewer: Option<Arc<dyn ManuscriptReviewer>>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    config: Config,
    reviewer: Option<Arc<dyn ManuscriptReviewer>>,
    port: u16,
    bind: &str,
) -> Result<()> {
    let state = AppState {
        config: Arc::new(config),
        reviewer,
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Inkguard API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/profiles/sanitize",
            post(handlers::profiles::sanitize_one),
        )
        .route(
            "/api/profiles/sanitize-batch",
            post(handlers::profiles::sanitize_batch),
        )
        .route("/api/avatar/{id}", get(handlers::profiles::get_avatar))
        .route("/api/integrity", post(handlers::integrity::evaluate))
        .route("/api/review", post(handlers::integrity::review))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
