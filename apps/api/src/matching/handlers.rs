//! Axum route handlers for the Match API.

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_profile_text, DocumentKind, ExtractError};
use crate::matching::scorer::ScoringConfig;
use crate::models::job::MatchResult;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub profile: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub results: Vec<MatchResult>,
    pub algorithm: &'static str,
    pub profile_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResponse {
    pub algorithm: &'static str,
    pub config: ScoringConfig,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/match
///
/// Ranks the catalog against a free-text profile.
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchResponse>, AppError> {
    let Json(request) = payload?;
    run_match(&state, &request.profile, None).await.map(Json)
}

/// POST /api/match/upload
///
/// Same as `/api/match`, but the profile arrives as a PDF or text document
/// in the multipart field `file`.
pub async fn handle_match_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let kind = DocumentKind::detect(content_type.as_deref(), file_name.as_deref())
            .ok_or_else(|| {
                ExtractError::Unsupported(content_type.clone().unwrap_or_else(|| "unknown".to_string()))
            })?;

        let bytes = field.bytes().await.map_err(multipart_error)?;
        let profile = extract_profile_text(bytes, kind).await?;

        return run_match(&state, &profile, file_name).await.map(Json);
    }

    Err(AppError::Validation(format!(
        "Multipart field '{UPLOAD_FIELD}' is required"
    )))
}

/// GET /api/algorithm
///
/// Reports which scoring version is live and its weights.
pub async fn handle_algorithm(State(state): State<AppState>) -> Json<AlgorithmResponse> {
    Json(AlgorithmResponse {
        algorithm: state.matcher.algorithm(),
        config: state.matcher.config().clone(),
    })
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", err.body_text()))
    }
}

async fn run_match(
    state: &AppState,
    profile: &str,
    file_name: Option<String>,
) -> Result<MatchResponse, AppError> {
    let profile = profile.trim();
    // UTF-16 code units, the length browsers report for the same text
    let profile_length = profile.encode_utf16().count();
    let min_chars = state.config.min_profile_chars;

    if profile_length < min_chars {
        return Err(AppError::Validation(format!(
            "Profile must be at least {min_chars} characters."
        )));
    }

    let catalog = state.catalog.clone();
    let results = state.matcher.match_jobs(profile, &catalog.jobs).await?;

    info!(
        algorithm = state.matcher.algorithm(),
        catalog_version = catalog.version,
        profile_length,
        results = results.len(),
        "Matched profile"
    );

    Ok(MatchResponse {
        results,
        algorithm: state.matcher.algorithm(),
        profile_length,
        file_name,
    })
}
