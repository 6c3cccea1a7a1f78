pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{career, chatbot, mentor, quiz, resume};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Chatbot
        .route("/chat/enhanced", post(chatbot::handlers::handle_enhanced_chat))
        .route("/chat/status", get(chatbot::handlers::handle_chat_status))
        // Mentor
        .route("/mentor/chat", post(mentor::handlers::handle_chat))
        // Quiz (GET and POST accepted on the legacy query-param endpoint)
        .route(
            "/quiz/generate",
            get(quiz::handlers::handle_generate).post(quiz::handlers::handle_generate),
        )
        .route("/quiz/generate-quiz", post(quiz::handlers::handle_generate_quiz))
        // Resume
        .route("/resume/analyze", post(resume::handlers::handle_analyze))
        // Career
        .route(
            "/career/analyze-profile",
            post(career::handlers::handle_analyze_profile),
        )
        .route(
            "/career/analyze-resume",
            post(career::handlers::handle_analyze_resume),
        )
        .with_state(state)
}
