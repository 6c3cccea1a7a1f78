//! Axum route handlers for the career service.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::career::orchestrator::recommend;
use crate::career::CareerSuggestion;
use crate::errors::AppError;
use crate::resume::extract::{extract_document_text, preview, read_upload};
use crate::state::AppState;

const PREVIEW_CHARS: usize = 500;

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub profile_text: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub recommendations: Vec<CareerSuggestion>,
}

#[derive(Debug, Serialize)]
pub struct ResumeAnalysisResponse {
    /// Preview only; uploaded content is never persisted.
    pub resume_text: String,
    pub recommendations: Vec<CareerSuggestion>,
}

/// POST /career/analyze-profile
pub async fn handle_analyze_profile(
    State(state): State<AppState>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    if request.profile_text.trim().is_empty() {
        return Err(AppError::Validation("profile_text cannot be empty".to_string()));
    }

    let recommendations = recommend(&state.llm, &request.profile_text).await?;
    Ok(Json(ProfileResponse { recommendations }))
}

/// POST /career/analyze-resume (multipart, field `file`)
///
/// Extracts resume text and runs the same orchestration over it.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysisResponse>, AppError> {
    let bytes = read_upload(&mut multipart).await?;
    let resume_text = extract_document_text(bytes).await?;

    if resume_text.trim().is_empty() {
        return Err(AppError::Extraction(
            "no text could be extracted from the document".to_string(),
        ));
    }

    let recommendations = recommend(&state.llm, &resume_text).await?;

    Ok(Json(ResumeAnalysisResponse {
        resume_text: preview(&resume_text, PREVIEW_CHARS),
        recommendations,
    }))
}
