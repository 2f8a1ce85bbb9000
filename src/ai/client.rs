//! LLM (chat-completion) API client module
//!
//! Encapsulates all LLM API interactions. Any OpenAI-compatible
//! `/chat/completions` endpoint works; Groq is the default.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

use crate::errors::ReportError;

/// Anything that can turn a list of role-tagged messages into one reply.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    /// Returns the first choice's content, or `None` when the response holds
    /// no usable text.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, auth or upstream failures.
    async fn complete(
        &self,
        messages: Vec<ChatCompletionMessage>,
        temperature: f32,
    ) -> Result<Option<String>, ReportError>;
}

/// Runs a completion and substitutes `fallback` when no content comes back.
///
/// # Errors
///
/// Propagates any error from the underlying completer.
pub async fn complete_or(
    llm: &dyn ChatCompleter,
    messages: Vec<ChatCompletionMessage>,
    temperature: f32,
    fallback: &str,
) -> Result<String, ReportError> {
    Ok(llm
        .complete(messages, temperature)
        .await?
        .unwrap_or_else(|| fallback.to_string()))
}

/// LLM API client for chat completions
pub struct LlmClient {
    http: Client,
    api_key: String,
    base_url: String,
    model_name: String,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        api_key: String,
        base_url: String,
        model_name: String,
        timeout: Duration,
    ) -> Result<Self, ReportError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReportError::ConfigError(format!("LLM HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_name,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatCompleter for LlmClient {
    #[tracing::instrument(level = "info", skip(self, messages), fields(model = %self.model_name))]
    async fn complete(
        &self,
        messages: Vec<ChatCompletionMessage>,
        temperature: f32,
    ) -> Result<Option<String>, ReportError> {
        #[cfg(feature = "debug-logs")]
        info!("Using chat prompt:\n{:?}", messages);

        #[cfg(not(feature = "debug-logs"))]
        info!("Requesting completion with {} messages in prompt", messages.len());

        let request_body = build_request_body(&self.model_name, &messages, temperature);

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ReportError::HttpError(format!("Chat-completion request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(ReportError::LlmError(format!(
                "Chat-completion API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            ReportError::LlmError(format!("Failed to parse chat-completion response: {e}"))
        })?;

        let text = first_choice_text(&response_json);
        debug!(has_content = text.is_some(), "Chat-completion response received");

        Ok(text)
    }
}

fn role_str(role: &MessageRole) -> &'static str {
    match role {
        MessageRole::system => "system",
        MessageRole::user => "user",
        MessageRole::assistant => "assistant",
        MessageRole::function => "function",
        MessageRole::tool => "tool",
    }
}

pub(crate) fn build_request_body(
    model: &str,
    messages: &[ChatCompletionMessage],
    temperature: f32,
) -> Value {
    let input_messages: Vec<Value> = messages
        .iter()
        .filter_map(|msg| match &msg.content {
            Content::Text(text) => Some(json!({
                "role": role_str(&msg.role),
                "content": text
            })),
            Content::ImageUrl(_) => None,
        })
        .collect();

    json!({
        "model": model,
        "messages": input_messages,
        "temperature": temperature
    })
}

/// `choices[0].message.content` when it is a non-empty string.
pub(crate) fn first_choice_text(response_json: &Value) -> Option<String> {
    response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .filter(|s| !s.is_empty())
        .map(std::string::ToString::to_string)
}
