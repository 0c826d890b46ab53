//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::tfl::{arrivals_url, line_status_url};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/arrivals", get(arrivals))
        .route("/api/line-status", get(line_status))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Fetch arrival predictions.
///
/// Always responds 200 with a well-formed body; a failed upstream fetch
/// shows up as `result: null`.
async fn arrivals(
    State(state): State<AppState>,
    Query(req): Query<ArrivalsRequest>,
) -> Result<Json<ArrivalsResponse>, AppError> {
    let url = req
        .url
        .or_else(|| req.stop_point.as_deref().map(arrivals_url))
        .ok_or_else(|| AppError::BadRequest {
            message: "provide either url or stopPoint".to_string(),
        })?;

    let mut fetcher = state.fetcher.lock().await;
    let result = fetcher.fetch_arrivals(&url).await;

    Ok(Json(ArrivalsResponse { url, result }))
}

/// Fetch and summarize a line status.
///
/// Always responds 200 with a well-formed body; a failed upstream fetch
/// falls back to the last known status (or good) with no messages.
async fn line_status(
    State(state): State<AppState>,
    Query(req): Query<LineStatusRequest>,
) -> Result<Json<LineStatusResponse>, AppError> {
    let url = req
        .url
        .or_else(|| req.line.as_deref().map(line_status_url))
        .ok_or_else(|| AppError::BadRequest {
            message: "provide either url or line".to_string(),
        })?;

    let mut fetcher = state.fetcher.lock().await;
    let summary = fetcher.fetch_line_status(&url).await;

    Ok(Json(LineStatusResponse {
        url,
        status: summary.status,
        status_description: summary.status_description,
        messages: summary.messages,
    }))
}

/// Application-level web errors.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        tracing::warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
