//! Axum route handlers for the quiz service.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::quiz::{generator, Quiz, QuizRequest};
use crate::state::AppState;

fn default_num_questions() -> u32 {
    10
}

fn default_difficulty() -> String {
    "intermediate".to_string()
}

/// Query parameters for the legacy generate endpoints.
#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    pub topic: String,
    pub domain: String,
    #[serde(default = "default_num_questions")]
    pub num_questions: u32,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

impl From<GenerateParams> for QuizRequest {
    fn from(params: GenerateParams) -> Self {
        QuizRequest {
            topic: params.topic,
            domain: params.domain,
            difficulty: params.difficulty.clone(),
            num_questions: params.num_questions,
            focus_areas: Vec::new(),
            user_level: params.difficulty,
        }
    }
}

/// GET /quiz/generate and POST /quiz/generate (legacy, query params only).
pub async fn handle_generate(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
) -> Result<Json<Quiz>, AppError> {
    let request = QuizRequest::from(params);
    let quiz = generator::generate(&state.llm, &request).await?;
    Ok(Json(quiz))
}

/// POST /quiz/generate-quiz (full request body).
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<Quiz>, AppError> {
    let quiz = generator::generate(&state.llm, &request).await?;
    Ok(Json(quiz))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_params_map_onto_quiz_request() {
        let params = GenerateParams {
            topic: "SQL".to_string(),
            domain: "Databases".to_string(),
            num_questions: 7,
            difficulty: "advanced".to_string(),
        };
        let request = QuizRequest::from(params);
        assert_eq!(request.num_questions, 7);
        assert_eq!(request.user_level, "advanced");
        assert!(request.focus_areas.is_empty());
    }

    #[test]
    fn test_query_defaults_apply() {
        let params: GenerateParams =
            serde_json::from_str(r#"{"topic": "Git", "domain": "Tooling"}"#).unwrap();
        assert_eq!(params.num_questions, 10);
        assert_eq!(params.difficulty, "intermediate");
    }
}
