//! Axum route handlers for the chatbot service.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::chatbot::knowledge::{MAIN_MENU_OPTIONS, PAGES};
use crate::chatbot::{advisory, router, ChatReply};
use crate::state::AppState;

/// One chat turn. Exactly one of `message` / `option_id` is meaningful,
/// selected by `input_type` ("text" or "option").
#[derive(Debug, Deserialize)]
pub struct ChatTurn {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub option_id: Option<String>,
    #[serde(default)]
    pub current_page: Option<String>,
    #[serde(default = "default_input_type")]
    pub input_type: String,
}

fn default_input_type() -> String {
    "text".to_string()
}

#[derive(Debug, Serialize)]
pub struct ChatEnvelope {
    pub success: bool,
    pub response: ChatReply,
    pub timestamp: String,
}

/// POST /chat/enhanced
///
/// Option turns go through the pure router; text turns go through the advisory
/// pipeline; anything else falls back to the main menu. Failures inside the
/// advisory pipeline degrade to an error-type reply, so the envelope is always
/// `success: true`.
pub async fn handle_enhanced_chat(
    State(state): State<AppState>,
    Json(turn): Json<ChatTurn>,
) -> Json<ChatEnvelope> {
    let response = match turn.input_type.as_str() {
        "option" => match turn.option_id.as_deref() {
            Some(option_id) => router::route_option(option_id),
            None => router::main_menu(),
        },
        "text" => match turn.message.as_deref().filter(|m| !m.trim().is_empty()) {
            Some(message) => {
                advisory::advise(&state.llm, message, turn.current_page.as_deref()).await
            }
            None => router::main_menu(),
        },
        _ => router::main_menu(),
    };

    Json(ChatEnvelope {
        success: true,
        response,
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// GET /chat/status
pub async fn handle_chat_status() -> Json<Value> {
    Json(json!({
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "ai_provider": "Groq API",
        "capabilities": {
            "text_chat": true,
            "option_navigation": true,
            "page_routing": true,
        },
        "knowledge_base": {
            "pages": PAGES.len(),
            "menu_options": MAIN_MENU_OPTIONS.len(),
        }
    }))
}
