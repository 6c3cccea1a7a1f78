//! The resume analysis pipeline: parse → score → recommend, strictly
//! sequential because each later prompt is seeded with the parsed JSON.

use serde::Serialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::llm_client::{normalize, CompletionOptions, LlmClient};
use crate::resume::extract::preview;
use crate::resume::prompts::{PARSE_PROMPT_TEMPLATE, RECOMMEND_PROMPT_TEMPLATE, SCORE_PROMPT_TEMPLATE};
use crate::resume::{ParsedResume, ResumeRecommendations, ResumeScore};

/// Resume text is truncated to this many characters in the parse prompt to
/// stay inside the model's token budget.
const RESUME_PROMPT_CHAR_LIMIT: usize = 3000;

const PREVIEW_CHARS: usize = 500;

/// The single response envelope for the full analysis. On failure only
/// `success` and `error` are populated; partial results are discarded.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_resume: Option<ParsedResume>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ResumeScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<ResumeRecommendations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzeResponse {
    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            parsed_resume: None,
            scores: None,
            recommendations: None,
            text_preview: None,
            error: Some(error),
        }
    }
}

/// Parse stage: resume text → structured resume.
pub async fn parse_resume(llm: &LlmClient, resume_text: &str) -> Result<ParsedResume, AppError> {
    let prompt = PARSE_PROMPT_TEMPLATE.replace(
        "{resume_text}",
        normalize::truncate_chars(resume_text, RESUME_PROMPT_CHAR_LIMIT),
    );
    Ok(llm
        .complete_json(&prompt, &CompletionOptions::default())
        .await?)
}

/// Score stage: parsed resume → six weighted sub-scores plus total.
pub async fn score_resume(llm: &LlmClient, parsed: &ParsedResume) -> Result<ResumeScore, AppError> {
    let resume_json = serde_json::to_string_pretty(parsed)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
    let prompt = SCORE_PROMPT_TEMPLATE.replace("{resume_json}", &resume_json);
    Ok(llm
        .complete_json(&prompt, &CompletionOptions::default())
        .await?)
}

/// Recommendation stage: parsed resume → improvement suggestions.
pub async fn recommend_improvements(
    llm: &LlmClient,
    parsed: &ParsedResume,
) -> Result<ResumeRecommendations, AppError> {
    let resume_json = serde_json::to_string_pretty(parsed)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
    let prompt = RECOMMEND_PROMPT_TEMPLATE.replace("{resume_json}", &resume_json);
    Ok(llm
        .complete_json(&prompt, &CompletionOptions::default())
        .await?)
}

/// Full pipeline over already-extracted text. Empty text fails before any
/// completion call; any later stage failure collapses into the error envelope.
pub async fn analyze(llm: &LlmClient, resume_text: &str) -> AnalyzeResponse {
    match run(llm, resume_text).await {
        Ok((parsed_resume, scores, recommendations)) => AnalyzeResponse {
            success: true,
            parsed_resume: Some(parsed_resume),
            scores: Some(scores),
            recommendations: Some(recommendations),
            text_preview: Some(preview(resume_text, PREVIEW_CHARS)),
            error: None,
        },
        Err(e) => {
            error!("resume analysis failed: {e}");
            AnalyzeResponse::failure(e.to_string())
        }
    }
}

async fn run(
    llm: &LlmClient,
    resume_text: &str,
) -> Result<(ParsedResume, ResumeScore, ResumeRecommendations), AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Extraction(
            "no text could be extracted from the document".to_string(),
        ));
    }

    info!("parsing resume structure");
    let parsed = parse_resume(llm, resume_text).await?;

    info!("scoring resume for ATS compatibility");
    let scores = score_resume(llm, &parsed).await?;

    info!("generating improvement recommendations");
    let recommendations = recommend_improvements(llm, &parsed).await?;

    Ok((parsed, scores, recommendations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmClient;

    /// Client with no credential and an unroutable endpoint: any completion
    /// call would fail loudly, so tests prove no call was made.
    fn offline_llm() -> LlmClient {
        LlmClient::new(
            "http://localhost:9/none".to_string(),
            None,
            "test".to_string(),
        )
    }

    #[tokio::test]
    async fn test_empty_text_fails_without_any_completion_call() {
        let response = analyze(&offline_llm(), "   \n  ").await;
        assert!(!response.success);
        let error = response.error.unwrap();
        assert!(error.to_lowercase().contains("extract"), "error was: {error}");
        assert!(response.parsed_resume.is_none());
        assert!(response.scores.is_none());
        assert!(response.recommendations.is_none());
    }

    #[tokio::test]
    async fn test_stage_failure_discards_partial_results() {
        // Non-empty text reaches the parse stage, which fails on the missing
        // credential; the envelope must carry only the error.
        let response = analyze(&offline_llm(), "Jane Doe\nRust developer").await;
        assert!(!response.success);
        assert!(response.error.is_some());
        assert!(response.parsed_resume.is_none());
        assert!(response.text_preview.is_none());
    }

    #[test]
    fn test_failure_envelope_serializes_without_null_fields() {
        let response = AnalyzeResponse::failure("boom".to_string());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], serde_json::json!(false));
        assert_eq!(json["error"], "boom");
        assert!(json.get("parsed_resume").is_none());
        assert!(json.get("scores").is_none());
    }

    #[test]
    fn test_parse_prompt_truncates_resume_text() {
        let long_text = "a".repeat(4000);
        let truncated = normalize::truncate_chars(&long_text, RESUME_PROMPT_CHAR_LIMIT);
        assert_eq!(truncated.len(), 3000);
    }
}
