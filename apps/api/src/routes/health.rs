//! Service info and liveness probes.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::llm_client::{CompletionOptions, LlmError};
use crate::state::AppState;

/// GET /
/// Service catalog for anyone poking at the API root.
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Career Advisor API",
        "version": env!("CARGO_PKG_VERSION"),
        "ai_provider": "Groq API",
        "model": state.llm.model(),
        "endpoints": {
            "/chat/enhanced": "Menu-driven career chatbot",
            "/chat/status": "Chatbot service status",
            "/mentor/chat": "Tool-augmented mentor chat",
            "/quiz/generate": "Generate MCQs (query params)",
            "/quiz/generate-quiz": "Generate MCQs (request body)",
            "/resume/analyze": "Resume parse, score, and recommendations",
            "/career/analyze-profile": "Career suggestions from profile text",
            "/career/analyze-resume": "Career suggestions from an uploaded resume",
            "/health": "Liveness probe (exercises the completion endpoint)",
        }
    }))
}

/// GET /health
/// Exercises the completion endpoint with a trivial prompt. "degraded" means
/// the endpoint answered but without usable content.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let options = CompletionOptions {
        max_tokens: 32,
        ..CompletionOptions::default()
    };

    let (status, message) = match state.llm.complete("Say 'Hello World'", &options).await {
        Ok(_) => ("healthy", "completion endpoint initialized and ready".to_string()),
        Err(LlmError::MissingContent) => (
            "degraded",
            "completion endpoint answered with an unexpected response shape".to_string(),
        ),
        Err(e) => ("unhealthy", format!("health check failed: {e}")),
    };

    Json(json!({
        "status": status,
        "message": message,
        "ai_provider": "Groq API",
        "model": state.llm.model(),
    }))
}
