//! Axum route handlers for the mentor service.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::AppError;
use crate::mentor::chat;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub status: String,
}

/// POST /mentor/chat
///
/// A missing credential is a configuration error; an empty message is rejected
/// before any outbound call. If even the fallback completion fails, the caller
/// gets a canned apology with `status: "error"` rather than the raw error.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if !state.llm.has_credential() {
        return Err(AppError::Config("GROQ_API_KEY is not set".to_string()));
    }
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message is required".to_string()));
    }

    match chat::respond(&state.llm, &state.tools, &request.message).await {
        Ok(response) => Ok(Json(ChatResponse {
            response,
            status: "success".to_string(),
        })),
        Err(e) => {
            error!("mentor fallback completion failed: {e}");
            Ok(Json(ChatResponse {
                response: "I apologize, but I'm experiencing technical difficulties. \
                           Please try again later."
                    .to_string(),
                status: "error".to_string(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crate::llm_client::LlmClient;
    use crate::mentor::tools::ToolRegistry;

    fn unreachable_state() -> AppState {
        AppState {
            llm: LlmClient::new(
                "http://127.0.0.1:9/v1/chat/completions".to_string(),
                Some("test-key".to_string()),
                "test-model".to_string(),
            ),
            tools: Arc::new(ToolRegistry::default()),
        }
    }

    #[tokio::test]
    async fn test_fallback_failure_yields_canned_apology() {
        // Keyword message, so both the tool path and the fallback run against
        // the unreachable endpoint; neither raw error reaches the caller.
        let Json(response) = handle_chat(
            State(unreachable_state()),
            Json(ChatRequest {
                message: "schedule a meeting with my mentor".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status, "error");
        assert!(response.response.contains("technical difficulties"));
    }
}
