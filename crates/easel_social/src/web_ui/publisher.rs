//! Web UI publisher: one browser session per publish.

use super::flow::PostingFlow;
use super::settings::{WebCredentials, WebUiSettings};
use crate::browser::{Browser, BrowserFactory};
use async_trait::async_trait;
use easel_core::{Caption, MaterializedImage, PublishResult};
use easel_interface::Publisher;
use tracing::{error, info, instrument, warn};

/// Posts images by driving the site's web UI.
///
/// Every call to [`Publisher::publish`] launches a fresh session and closes
/// it exactly once, whether the flow finished or failed. A session that
/// never launched is never closed.
pub struct WebUiPublisher<F: BrowserFactory> {
    factory: F,
    credentials: WebCredentials,
    settings: WebUiSettings,
}

impl<F: BrowserFactory> WebUiPublisher<F> {
    /// Create a publisher.
    pub fn new(factory: F, credentials: WebCredentials, settings: WebUiSettings) -> Self {
        Self {
            factory,
            credentials,
            settings,
        }
    }

    /// Settings in effect.
    pub fn settings(&self) -> &WebUiSettings {
        &self.settings
    }
}

#[async_trait]
impl<F: BrowserFactory> Publisher for WebUiPublisher<F> {
    #[instrument(skip_all, fields(account = self.credentials.username(), image = %image.path().display()))]
    async fn publish(&self, image: &MaterializedImage, caption: &Caption) -> PublishResult {
        let absolute = match tokio::fs::canonicalize(image.path()).await {
            Ok(path) => path,
            Err(e) => {
                error!(error = %e, "Image not readable");
                return PublishResult::failed(format!(
                    "Failed to read image {}: {}",
                    image.path().display(),
                    e
                ));
            }
        };
        let image_path = absolute.to_string_lossy().into_owned();

        let mut browser = match self.factory.launch().await {
            Ok(browser) => browser,
            Err(e) => {
                error!(error = %e, "Browser launch failed");
                return PublishResult::failed(e.to_string());
            }
        };

        let (outcome, state, failed_at) = {
            let mut flow = PostingFlow::new(&mut browser, &self.settings, &self.credentials);
            let outcome = flow.run(&image_path, caption.text()).await;
            (outcome, flow.state(), flow.failed_at())
        };

        if let Err(e) = browser.close().await {
            warn!(error = %e, "Browser teardown failed");
        }

        match outcome {
            Ok(()) => {
                info!("Posted through web UI");
                PublishResult::succeeded()
            }
            Err(e) => {
                let at = failed_at.unwrap_or(state);
                error!(error = %e, %state, %at, "Web UI posting failed");
                PublishResult::failed(format!("{} (state: {}, at: {})", e, state, at))
            }
        }
    }

    fn channel_name(&self) -> &'static str {
        "web"
    }
}
