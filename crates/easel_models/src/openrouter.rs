//! OpenRouter driver using the OpenAI-compatible client.

use crate::openai_compat::{DEFAULT_TEXT_TIMEOUT, OpenAICompatibleClient};
use async_trait::async_trait;
use easel_core::ChatMessage;
use easel_error::{EaselResult, ModelsResult};
use easel_interface::ChatDriver;
use std::time::Duration;
use tracing::instrument;

/// OpenRouter chat completions endpoint.
pub const OPENROUTER_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model used when none is configured.
pub const DEFAULT_OPENROUTER_MODEL: &str = "deepseek/deepseek-r1-distill-llama-70b:free";

/// OpenRouter chat driver.
#[derive(Debug, Clone)]
pub struct OpenRouterDriver {
    inner: OpenAICompatibleClient,
}

impl OpenRouterDriver {
    /// Creates a driver against the public OpenRouter endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be initialized.
    #[instrument(skip(api_key), fields(model = %model))]
    pub fn with_api_key(api_key: String, model: String) -> ModelsResult<Self> {
        Self::with_endpoint(api_key, model, OPENROUTER_ENDPOINT.to_string())
    }

    /// Creates a driver against a custom endpoint (self-hosted router, proxy).
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be initialized.
    pub fn with_endpoint(api_key: String, model: String, endpoint: String) -> ModelsResult<Self> {
        Self::with_timeout(api_key, model, endpoint, DEFAULT_TEXT_TIMEOUT)
    }

    /// Creates a driver with a custom endpoint and request timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be initialized.
    pub fn with_timeout(
        api_key: String,
        model: String,
        endpoint: String,
        timeout: Duration,
    ) -> ModelsResult<Self> {
        let inner = OpenAICompatibleClient::new(api_key, model, endpoint, "openrouter", timeout)?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl ChatDriver for OpenRouterDriver {
    #[instrument(skip(self, messages), fields(provider = "openrouter", model = %self.inner.model_name()))]
    async fn complete(&self, messages: &[ChatMessage]) -> EaselResult<String> {
        self.inner.complete(messages).await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
