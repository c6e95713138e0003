//! Telegram bot API publisher.

use async_trait::async_trait;
use easel_core::{Caption, MaterializedImage, PublishResult};
use easel_error::{SocialError, SocialErrorKind, SocialResult};
use easel_interface::Publisher;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Public bot API root.
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Longest caption `sendPhoto` accepts.
pub const TELEGRAM_CAPTION_LIMIT: usize = 1024;

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Sends photos to one chat through a Telegram bot.
pub struct TelegramPublisher {
    client: reqwest::Client,
    token: String,
    chat_id: String,
    api_base: String,
}

impl TelegramPublisher {
    /// Create a publisher for the public bot API.
    ///
    /// # Errors
    ///
    /// Returns error if token or chat_id are empty, or the HTTP client cannot be built.
    #[instrument(skip_all)]
    pub fn new(token: impl Into<String>, chat_id: impl AsRef<str>) -> SocialResult<Self> {
        Self::with_api_base(token, chat_id, TELEGRAM_API_BASE)
    }

    /// Create a publisher against a different API root (local bot API server).
    ///
    /// # Errors
    ///
    /// Returns error if token or chat_id are empty, or the HTTP client cannot be built.
    pub fn with_api_base(
        token: impl Into<String>,
        chat_id: impl AsRef<str>,
        api_base: impl Into<String>,
    ) -> SocialResult<Self> {
        let token = token.into();
        let chat_id = chat_id.as_ref().to_string();

        if token.is_empty() || chat_id.is_empty() {
            return Err(SocialError::new(SocialErrorKind::Http(
                "Telegram token and chat id must not be empty".to_string(),
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .map_err(|e| SocialError::new(SocialErrorKind::Http(e.to_string())))?;

        Ok(Self {
            client,
            token,
            chat_id,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    /// Chat the photos go to.
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    fn send_photo_url(&self) -> String {
        format!("{}/bot{}/sendPhoto", self.api_base, self.token)
    }

    /// Upload the image with its caption.
    pub async fn send_photo(&self, image: &MaterializedImage, caption: &Caption) -> SocialResult<()> {
        let bytes = tokio::fs::read(image.path()).await.map_err(|e| {
            SocialError::new(SocialErrorKind::FileRead(format!(
                "{}: {}",
                image.path().display(),
                e
            )))
        })?;
        let file_name = image
            .path()
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "image.jpg".to_string());

        let photo = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("image/jpeg")
            .map_err(|e| SocialError::new(SocialErrorKind::Http(e.to_string())))?;
        let form = Form::new()
            .text("chat_id", self.chat_id.clone())
            .text("caption", caption.truncated(TELEGRAM_CAPTION_LIMIT).to_string())
            .part("photo", photo);

        let response = self
            .client
            .post(self.send_photo_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| SocialError::new(SocialErrorKind::Http(e.without_url().to_string())))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(SocialError::new(SocialErrorKind::Telegram {
                status: status.as_u16(),
                body,
            }));
        }

        Ok(())
    }
}

#[async_trait]
impl Publisher for TelegramPublisher {
    #[instrument(skip(self, image, caption), fields(chat_id = %self.chat_id, path = %image.path().display()))]
    async fn publish(&self, image: &MaterializedImage, caption: &Caption) -> PublishResult {
        match self.send_photo(image, caption).await {
            Ok(()) => {
                info!("Telegram message sent successfully");
                PublishResult::succeeded()
            }
            Err(e) => {
                error!(error = %e, "Failed to send Telegram message");
                PublishResult::failed(e.to_string())
            }
        }
    }

    fn channel_name(&self) -> &'static str {
        "telegram"
    }
}
