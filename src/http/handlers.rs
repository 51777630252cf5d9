//! HTTP request handlers
//!
//! Implements handlers for the subtitles API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::SubtitleError;
use crate::pipeline::{collect_subtitles, SubtitlesResult};
use crate::state::AppState;
use crate::youtube::VideoId;

/// HTTP error type
#[derive(Debug)]
pub enum HttpError {
    InvalidUrl,
    NotFound,
    InternalError(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::InvalidUrl => (StatusCode::BAD_REQUEST, "Invalid YouTube video URL provided."),
            HttpError::NotFound => (StatusCode::NOT_FOUND, "No subtitles found for this video."),
            HttpError::InternalError(detail) => {
                tracing::error!("Request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.",
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<SubtitleError> for HttpError {
    fn from(err: SubtitleError) -> Self {
        match err {
            SubtitleError::InvalidInput(_) => HttpError::InvalidUrl,
            SubtitleError::VideoNotFound(_)
            | SubtitleError::NoTracks(_)
            | SubtitleError::NoUsableSubtitles => {
                tracing::info!("{}", err);
                HttpError::NotFound
            }
            _ => HttpError::InternalError(err.to_string()),
        }
    }
}

/// Query parameters for the subtitles endpoint
#[derive(Debug, Deserialize)]
pub struct SubtitlesQuery {
    pub url: Option<String>,
}

/// Subtitles endpoint
/// GET /api/subtitles?url=<video url>
pub async fn get_subtitles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SubtitlesQuery>,
) -> Result<Json<SubtitlesResult>, HttpError> {
    let url = query
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or(HttpError::InvalidUrl)?;
    let video = VideoId::from_url(url)?;

    let result = collect_subtitles(
        state.lister.as_ref(),
        state.fetcher.as_ref(),
        &video,
        &state.pipeline,
    )
    .await?;

    Ok(Json(result))
}

/// CORS preflight for clients that do not send the preflight headers
/// OPTIONS /api/subtitles
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

/// Version information endpoint
pub async fn version_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "online",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
