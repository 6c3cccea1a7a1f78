use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::mentor::tools::ToolRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup; requests never mutate shared state.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Static mentor tool set, resolved by name at dispatch time.
    pub tools: Arc<ToolRegistry>,
}
