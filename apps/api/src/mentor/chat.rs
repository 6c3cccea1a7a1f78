//! Mentor dialogue: a fixed two-hop call sequence on the tool path (advertise
//! tools, execute requested ones, ask for a final answer), with a plain
//! completion fallback for everything else. No loops, no planning, no retries.

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use tracing::warn;

use crate::llm_client::{ChatMessage, CompletionOptions, LlmClient, LlmError};
use crate::mentor::tools::ToolRegistry;

pub const MENTOR_SYSTEM_PROMPT: &str = "You are a helpful AI career mentor assistant. \
    Provide helpful, informative, and supportive responses to general questions. \
    Be professional yet friendly in your tone. If you don't know something, admit it honestly.";

/// Keywords whose presence routes a message down the tool path. Membership in
/// this table is the sole trigger; anything else goes straight to the plain
/// completion.
const TOOL_KEYWORDS: &[&str] = &[
    "search", "find", "lookup", "job", "career", "position", "role",
    "wellness", "stress", "anxiety", "mental health", "calm",
    "calendar", "schedule", "meeting", "appointment", "invite",
    "web", "internet", "online", "latest", "current", "trend",
];

pub fn should_use_tools(message: &str) -> bool {
    let lower = message.to_lowercase();
    TOOL_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Produces the mentor's reply. Tool-path failures of any kind (lookup miss,
/// malformed arguments, tool execution error, provider error) are logged and
/// masked behind the plain-completion fallback; only a fallback failure
/// propagates to the handler.
pub async fn respond(
    llm: &LlmClient,
    registry: &ToolRegistry,
    message: &str,
) -> Result<String, LlmError> {
    if should_use_tools(message) {
        match tool_assisted_reply(llm, registry, message).await {
            Ok(reply) => return Ok(reply),
            Err(e) => warn!("tool path failed, falling back to plain completion: {e:#}"),
        }
    }
    fallback_reply(llm, message).await
}

async fn fallback_reply(llm: &LlmClient, message: &str) -> Result<String, LlmError> {
    llm.complete_with_system(MENTOR_SYSTEM_PROMPT, message, &CompletionOptions::default())
        .await
}

/// First hop advertises the tools; if the model requests invocations, each is
/// resolved by exact name and executed, and a second hop turns the results into
/// the final answer. If the model declines to call tools, its direct reply is
/// returned.
async fn tool_assisted_reply(
    llm: &LlmClient,
    registry: &ToolRegistry,
    message: &str,
) -> Result<String> {
    let tools = registry.definitions();
    let options = CompletionOptions::default();

    let messages = vec![ChatMessage::user(message)];
    let assistant = llm.chat(&messages, Some(&tools), &options).await?;

    let tool_calls = assistant.tool_calls.clone().unwrap_or_default();
    if tool_calls.is_empty() {
        return assistant.text().map_err(Into::into);
    }

    let mut results = Vec::with_capacity(tool_calls.len());
    for call in &tool_calls {
        let name = call.function.name.as_str();
        let tool = registry
            .get(name)
            .ok_or_else(|| anyhow!("model requested unknown tool '{name}'"))?;
        let arguments: Value = serde_json::from_str(&call.function.arguments)
            .with_context(|| format!("malformed arguments for tool '{name}'"))?;
        let output = tool
            .invoke(arguments)
            .await
            .with_context(|| format!("tool '{name}' failed"))?;
        results.push(format!("{name} result: {output}"));
    }

    let follow_up = vec![
        ChatMessage::user(message),
        ChatMessage::assistant_tool_calls(tool_calls),
        ChatMessage::tool(results.join("\n")),
    ];
    let final_reply = llm.chat(&follow_up, None, &options).await?;
    final_reply.text().map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_keywords_trigger_tool_path() {
        assert!(should_use_tools("Can you schedule a meeting with my mentor?"));
        assert!(should_use_tools("I'm feeling a lot of STRESS lately"));
        assert!(should_use_tools("find me the latest industry trends"));
    }

    #[test]
    fn test_keyword_membership_is_the_sole_trigger() {
        // Starts like a "simple question" but contains a keyword; the keyword wins.
        assert!(should_use_tools("what is the current job market like?"));
        // No keyword at all: plain completion path.
        assert!(!should_use_tools("how are you today?"));
        assert!(!should_use_tools("explain recursion to me"));
    }

    #[test]
    fn test_keyword_match_is_substring_based() {
        // "schedule" inside "rescheduled" still counts.
        assert!(should_use_tools("my exam got rescheduled"));
    }

    #[tokio::test]
    async fn test_tool_path_failure_is_masked_behind_fallback() {
        let llm = LlmClient::new(
            "http://127.0.0.1:9/v1/chat/completions".to_string(),
            None,
            "test-model".to_string(),
        );
        let registry = ToolRegistry::default();

        // The keyword routes this down the tool path, whose first hop fails.
        // The caller sees the fallback completion's error, not the tool path's:
        // the same missing-credential failure the plain path would report.
        let err = respond(&llm, &registry, "schedule a meeting for me")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MissingCredential));
    }
}
