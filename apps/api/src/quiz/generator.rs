//! Quiz generation: render the prompt, one completion call, normalize, parse.

use std::time::Duration;

use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::{CompletionOptions, LlmClient};
use crate::quiz::prompts::QUIZ_PROMPT_TEMPLATE;
use crate::quiz::{Quiz, QuizRequest};

/// Quiz output is large; give it a bigger budget and a longer leash than the
/// default completion call.
fn quiz_options() -> CompletionOptions {
    CompletionOptions {
        max_tokens: 6000,
        timeout: Duration::from_secs(60),
        ..CompletionOptions::default()
    }
}

pub fn build_prompt(request: &QuizRequest) -> String {
    let focus_areas = if request.focus_areas.is_empty() {
        "General skills".to_string()
    } else {
        request.focus_areas.join(", ")
    };

    QUIZ_PROMPT_TEMPLATE
        .replace("{num_questions}", &request.num_questions.to_string())
        .replace("{topic}", &request.topic)
        .replace("{domain}", &request.domain)
        .replace("{difficulty}", &request.difficulty)
        .replace("{user_level}", &request.user_level)
        .replace("{focus_areas}", &focus_areas)
}

/// Generates a quiz. A question-count mismatch is trust-but-warn: logged and
/// returned as-is. A JSON parse failure is a hard error carrying a truncated
/// excerpt of the raw model output.
pub async fn generate(llm: &LlmClient, request: &QuizRequest) -> Result<Quiz, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }
    if request.domain.trim().is_empty() {
        return Err(AppError::Validation("domain cannot be empty".to_string()));
    }
    if request.num_questions == 0 {
        return Err(AppError::Validation(
            "num_questions must be at least 1".to_string(),
        ));
    }

    let prompt = build_prompt(request);
    let quiz: Quiz = llm.complete_json(&prompt, &quiz_options()).await?;

    if quiz.questions.len() as u32 != request.num_questions {
        warn!(
            requested = request.num_questions,
            received = quiz.questions.len(),
            "model returned a different question count than requested"
        );
    }

    Ok(quiz)
}
