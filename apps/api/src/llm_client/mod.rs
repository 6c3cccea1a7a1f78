/// Completion client — the single point of entry for all model calls in the API.
///
/// ARCHITECTURAL RULE: no other module may call the completion endpoint directly.
/// All model interactions MUST go through this module.
///
/// The wire format is the OpenAI-compatible chat-completions shape served by Groq:
/// POST {messages, model, temperature, max_tokens, top_p, stream, tools?, tool_choice?}
/// returning {choices: [{message: {content, tool_calls?}}]}.
///
/// There is no automatic retry anywhere: callers that need resilience fall back to
/// a different, simpler request instead of repeating the same one.
use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod normalize;

use self::normalize::MalformedResponse;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("completion credential is not configured (set GROQ_API_KEY)")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion response is missing message content")]
    MissingContent,

    #[error(transparent)]
    Malformed(#[from] MalformedResponse),
}

/// One message in a chat-completions exchange. `tool_calls` is only populated on
/// the assistant message that requested tool invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
            tool_calls: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
            tool_calls: None,
        }
    }

    /// The assistant turn that requested tool invocations, echoed back verbatim
    /// in the follow-up exchange.
    pub fn assistant_tool_calls(tool_calls: Vec<ToolCall>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: String::new(),
            tool_calls: Some(tool_calls),
        }
    }

    pub fn tool(content: impl Into<String>) -> Self {
        Self {
            role: "tool".to_string(),
            content: content.into(),
            tool_calls: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub call_type: Option<String>,
    pub function: FunctionCall,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded argument object, exactly as the model supplied it.
    pub arguments: String,
}

/// A tool advertised to the model in OpenAI function format.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: FunctionSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: serde_json::Value,
}

/// Per-call sampling and budget knobs. Defaults match the values every service
/// uses except the quiz generator, which needs a larger output budget.
#[derive(Debug, Clone)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub timeout: Duration,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1024,
            top_p: 0.9,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    messages: &'a [ChatMessage],
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<&'a [ToolDefinition]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

/// The assistant message returned by the completion endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

impl AssistantMessage {
    /// Non-empty text content, or `MissingContent`.
    pub fn text(self) -> Result<String, LlmError> {
        self.content
            .filter(|c| !c.trim().is_empty())
            .ok_or(LlmError::MissingContent)
    }
}

/// The single completion client shared by all services.
#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl LlmClient {
    pub fn new(base_url: String, api_key: Option<String>, model: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Makes exactly one call to the completion endpoint. Fails on a missing
    /// credential, network error, non-2xx status, or an empty choice list.
    pub async fn chat(
        &self,
        messages: &[ChatMessage],
        tools: Option<&[ToolDefinition]>,
        options: &CompletionOptions,
    ) -> Result<AssistantMessage, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingCredential)?;

        let request_body = ChatCompletionRequest {
            messages,
            model: &self.model,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            top_p: options.top_p,
            stream: false,
            tools,
            tool_choice: tools.map(|_| "auto"),
        };

        let response = self
            .http
            .post(&self.base_url)
            .bearer_auth(api_key)
            .json(&request_body)
            .timeout(options.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::MissingContent)?;

        debug!(
            model = %self.model,
            has_tool_calls = choice.message.tool_calls.is_some(),
            "completion call succeeded"
        );

        Ok(choice.message)
    }

    /// Sends a single user-role prompt and returns the text reply.
    pub async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, LlmError> {
        let messages = [ChatMessage::user(prompt)];
        self.chat(&messages, None, options).await?.text()
    }

    /// Sends a system prompt plus a user message and returns the text reply.
    pub async fn complete_with_system(
        &self,
        system: &str,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, LlmError> {
        let messages = [ChatMessage::system(system), ChatMessage::user(prompt)];
        self.chat(&messages, None, options).await?.text()
    }

    /// Convenience method that completes the prompt, strips optional markdown
    /// fences, and deserializes the remainder as JSON. The prompt must instruct
    /// the model to return valid JSON.
    pub async fn complete_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<T, LlmError> {
        let text = self.complete(prompt, options).await?;
        Ok(normalize::parse_json(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_without_credential() -> LlmClient {
        LlmClient::new(
            "http://localhost:9/v1/chat/completions".to_string(),
            None,
            "test-model".to_string(),
        )
    }

    #[tokio::test]
    async fn test_missing_credential_is_config_error_at_first_use() {
        let client = client_without_credential();
        let err = client
            .complete("hello", &CompletionOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MissingCredential));
    }

    #[test]
    fn test_request_serializes_without_tools_fields() {
        let messages = [ChatMessage::user("hi")];
        let request = ChatCompletionRequest {
            messages: &messages,
            model: "llama-3.1-8b-instant",
            temperature: 0.7,
            max_tokens: 1024,
            top_p: 0.9,
            stream: false,
            tools: None,
            tool_choice: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("tools").is_none());
        assert!(json.get("tool_choice").is_none());
        assert_eq!(json["stream"], serde_json::json!(false));
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_response_with_tool_calls_deserializes() {
        let body = r#"{
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {"name": "job_search", "arguments": "{\"role\": \"engineer\"}"}
                    }]
                }
            }]
        }"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        let message = &parsed.choices[0].message;
        assert!(message.content.is_none());
        let calls = message.tool_calls.as_ref().unwrap();
        assert_eq!(calls[0].function.name, "job_search");
    }

    #[test]
    fn test_assistant_message_text_rejects_empty_content() {
        let message = AssistantMessage {
            content: Some("   ".to_string()),
            tool_calls: None,
        };
        assert!(matches!(message.text(), Err(LlmError::MissingContent)));

        let message = AssistantMessage {
            content: Some("hello".to_string()),
            tool_calls: None,
        };
        assert_eq!(message.text().unwrap(), "hello");
    }
}
