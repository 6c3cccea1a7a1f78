mod career;
mod chatbot;
mod config;
mod errors;
mod llm_client;
mod mentor;
mod quiz;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::mentor::tools::ToolRegistry;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Advisor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the completion client. A missing credential is not fatal here;
    // it surfaces as a configuration error on first use.
    let llm = LlmClient::new(
        config.groq_api_url.clone(),
        config.groq_api_key.clone(),
        config.model.clone(),
    );
    info!("Completion client initialized (model: {})", llm.model());
    if config.groq_api_key.is_none() {
        tracing::warn!("GROQ_API_KEY is not set; completion calls will fail until it is provided");
    }

    // Mentor tool registry: static set, loaded once, read-only thereafter.
    let tools = Arc::new(ToolRegistry::default());
    info!("Mentor tools registered: {:?}", tools.names());

    let state = AppState { llm, tools };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
