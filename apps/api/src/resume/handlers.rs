//! Axum route handlers for the resume service.

use axum::extract::{Multipart, State};
use axum::Json;

use crate::errors::AppError;
use crate::resume::extract::{extract_document_text, read_upload};
use crate::resume::pipeline::{analyze, AnalyzeResponse};
use crate::state::AppState;

/// POST /resume/analyze (multipart, field `file`)
///
/// Runs the full pipeline and always answers with the analysis envelope:
/// extraction or stage failures become `{success: false, error}` rather than an
/// HTTP error. Only a malformed upload itself is rejected with 400.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let bytes = read_upload(&mut multipart).await?;

    let resume_text = match extract_document_text(bytes).await {
        Ok(text) => text,
        Err(e) => return Ok(Json(AnalyzeResponse::failure(e.to_string()))),
    };

    Ok(Json(analyze(&state.llm, &resume_text).await))
}
