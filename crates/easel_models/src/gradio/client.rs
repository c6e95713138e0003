//! Gradio `call` API client.

use super::events::parse_event_stream;
use async_trait::async_trait;
use easel_error::{ModelsError, ModelsErrorKind, ModelsResult};
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, instrument};

/// Budget for one inference job, queueing included.
pub const DEFAULT_INFERENCE_TIMEOUT: Duration = Duration::from_secs(300);

/// Something that can run a named Gradio endpoint with positional inputs.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Run `api_name` with `data` and return the raw result payload.
    async fn predict(&self, api_name: &str, data: Vec<Value>) -> ModelsResult<Value>;
}

/// Turns a Space id or URL into the Space's base URL.
///
/// # Examples
///
/// ```
/// use easel_models::resolve_space_url;
///
/// assert_eq!(
///     resolve_space_url("black-forest-labs/FLUX.1-schnell"),
///     "https://black-forest-labs-flux-1-schnell.hf.space"
/// );
/// assert_eq!(resolve_space_url("http://localhost:7860/"), "http://localhost:7860");
/// ```
pub fn resolve_space_url(space: &str) -> String {
    let space = space.trim();
    if space.starts_with("http://") || space.starts_with("https://") {
        return space.trim_end_matches('/').to_string();
    }

    let subdomain: String = space
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '/' | '.' | '_' => '-',
            other => other,
        })
        .collect();
    format!("https://{}.hf.space", subdomain)
}

#[async_trait]
impl<T: InferenceBackend + ?Sized> InferenceBackend for std::sync::Arc<T> {
    async fn predict(&self, api_name: &str, data: Vec<Value>) -> ModelsResult<Value> {
        (**self).predict(api_name, data).await
    }
}

#[derive(Debug, Deserialize)]
struct EventHandle {
    event_id: String,
}

/// HTTP client for a Gradio app.
#[derive(Debug, Clone)]
pub struct GradioClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GradioClient {
    /// Creates a client for `space` (a `owner/name` id or a URL).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(space: &str, token: Option<String>, timeout: Duration) -> ModelsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Http(e.to_string())))?;

        Ok(Self {
            client,
            base_url: resolve_space_url(space),
            token,
        })
    }

    /// Resolved base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn call_url(&self, api_name: &str) -> String {
        format!(
            "{}/gradio_api/call/{}",
            self.base_url,
            api_name.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check(response: reqwest::Response) -> ModelsResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ModelsError::new(ModelsErrorKind::Api {
            status: status.as_u16(),
            message,
        }))
    }
}

#[async_trait]
impl InferenceBackend for GradioClient {
    #[instrument(skip(self, data), fields(base_url = %self.base_url))]
    async fn predict(&self, api_name: &str, data: Vec<Value>) -> ModelsResult<Value> {
        let url = self.call_url(api_name);
        debug!(url = %url, "Submitting Gradio job");

        let response = self
            .authorize(self.client.post(&url).json(&json!({ "data": data })))
            .send()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e))))?;
        let handle: EventHandle = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::ResponseParsing(e.to_string())))?;

        debug!(event_id = %handle.event_id, "Awaiting Gradio result");
        let response = self
            .authorize(self.client.get(format!("{}/{}", url, handle.event_id)))
            .send()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e))))?;
        let body = Self::check(response)
            .await?
            .text()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::Http(format!("Stream error: {}", e))))?;

        parse_event_stream(&body)
    }
}
