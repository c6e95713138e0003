//! OpenAI-compatible chat completions client.
//!
//! OpenRouter, Groq and most hosted inference routers accept the same
//! `{model, messages}` body and answer with `choices[0].message.content`.

use async_trait::async_trait;
use easel_core::ChatMessage;
use easel_error::{EaselResult, ModelsError, ModelsErrorKind, ModelsResult};
use easel_interface::ChatDriver;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Request timeout for text generation.
pub const DEFAULT_TEXT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

/// Pulls `choices[0].message.content` out of a chat completion body.
///
/// Returns the trimmed content, or [`ModelsErrorKind::EmptyContent`] when the
/// field is missing, not a string, or blank.
///
/// # Examples
///
/// ```
/// use easel_models::extract_content;
/// use serde_json::json;
///
/// let body = json!({"choices": [{"message": {"content": "  a fox in snow\n"}}]});
/// assert_eq!(extract_content(&body, "openrouter").unwrap(), "a fox in snow");
///
/// let empty = json!({"choices": []});
/// assert!(extract_content(&empty, "openrouter").is_err());
/// ```
pub fn extract_content(body: &Value, provider: &str) -> ModelsResult<String> {
    let content = body
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();

    if content.is_empty() {
        return Err(ModelsError::new(ModelsErrorKind::EmptyContent(
            provider.to_string(),
        )));
    }

    Ok(content.to_string())
}

/// Client for any OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
    provider: &'static str,
}

impl OpenAICompatibleClient {
    /// Creates a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(
        api_key: String,
        model: String,
        endpoint: String,
        provider: &'static str,
        timeout: Duration,
    ) -> ModelsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Http(e.to_string())))?;

        Ok(Self {
            client,
            api_key,
            model,
            endpoint,
            provider,
        })
    }

    /// Endpoint URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends the messages and returns the extracted content.
    #[instrument(skip(self, messages), fields(provider = self.provider, model = %self.model))]
    pub async fn chat(&self, messages: &[ChatMessage]) -> ModelsResult<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
        };
        debug!(endpoint = %self.endpoint, "Sending chat completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e))))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ModelsError::new(ModelsErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::ResponseParsing(e.to_string())))?;

        extract_content(&body, self.provider)
    }
}

#[async_trait]
impl ChatDriver for OpenAICompatibleClient {
    async fn complete(&self, messages: &[ChatMessage]) -> EaselResult<String> {
        Ok(self.chat(messages).await?)
    }

    fn provider_name(&self) -> &'static str {
        self.provider
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
