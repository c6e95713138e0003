//! WebDriver-backed browser sessions via fantoccini.

use crate::browser::{Browser, BrowserFactory, Locator, WaitCondition};
use async_trait::async_trait;
use easel_error::{SocialError, SocialErrorKind, SocialResult};
use fantoccini::elements::Element;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{debug, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

impl Locator {
    fn as_fantoccini(&self) -> fantoccini::Locator<'_> {
        match self {
            Self::Css(selector) => fantoccini::Locator::Css(selector),
            Self::XPath(expression) => fantoccini::Locator::XPath(expression),
        }
    }
}

/// Launches Chrome sessions through a running WebDriver server (e.g. chromedriver).
#[derive(Debug, Clone)]
pub struct WebDriverFactory {
    webdriver_url: String,
    headless: bool,
    window_size: (u32, u32),
}

impl WebDriverFactory {
    /// Factory for the WebDriver server at `webdriver_url`.
    pub fn new(webdriver_url: impl Into<String>, headless: bool) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
            headless,
            window_size: (1280, 960),
        }
    }

    /// Override the browser window size.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    fn capabilities(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut args = vec![
            format!("--window-size={},{}", self.window_size.0, self.window_size.1),
            "--disable-notifications".to_string(),
            "--lang=en-US".to_string(),
        ];
        if self.headless {
            args.push("--headless=new".to_string());
        }

        let mut caps = serde_json::Map::new();
        caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
        caps
    }
}

#[async_trait]
impl BrowserFactory for WebDriverFactory {
    type Browser = WebDriverBrowser;

    #[instrument(skip(self), fields(webdriver_url = %self.webdriver_url, headless = self.headless))]
    async fn launch(&self) -> SocialResult<WebDriverBrowser> {
        let client = ClientBuilder::native()
            .capabilities(self.capabilities())
            .connect(&self.webdriver_url)
            .await
            .map_err(|e| SocialError::new(SocialErrorKind::Driver(e.to_string())))?;
        debug!("WebDriver session started");
        Ok(WebDriverBrowser {
            client: Some(client),
        })
    }
}

/// One WebDriver session.
pub struct WebDriverBrowser {
    client: Option<Client>,
}

impl WebDriverBrowser {
    fn client(&self) -> SocialResult<&Client> {
        self.client.as_ref().ok_or_else(|| {
            SocialError::new(SocialErrorKind::Driver("session already closed".to_string()))
        })
    }

    async fn meets(element: &Element, condition: WaitCondition) -> bool {
        match condition {
            WaitCondition::Present => true,
            WaitCondition::Clickable => {
                element.is_displayed().await.unwrap_or(false)
                    && element.is_enabled().await.unwrap_or(false)
            }
        }
    }
}

#[async_trait]
impl Browser for WebDriverBrowser {
    type Element = Element;

    async fn open(&mut self, url: &str) -> SocialResult<()> {
        self.client()?
            .goto(url)
            .await
            .map_err(|e| SocialError::new(SocialErrorKind::Driver(format!("{}: {}", url, e))))
    }

    async fn find_and_wait(
        &mut self,
        locator: &Locator,
        condition: WaitCondition,
        timeout: Duration,
    ) -> SocialResult<Element> {
        let client = self.client()?;
        let deadline = Instant::now() + timeout;

        loop {
            if let Ok(elements) = client.find_all(locator.as_fantoccini()).await {
                for element in elements {
                    if Self::meets(&element, condition).await {
                        return Ok(element);
                    }
                }
            }
            if Instant::now() >= deadline {
                return Err(SocialError::new(SocialErrorKind::ElementTimeout {
                    locator: format!("{} ({})", locator, condition),
                    timeout_secs: timeout.as_secs(),
                }));
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn wait_gone(&mut self, locator: &Locator, timeout: Duration) -> SocialResult<()> {
        let client = self.client()?;
        let deadline = Instant::now() + timeout;

        loop {
            let elements = client
                .find_all(locator.as_fantoccini())
                .await
                .map_err(|e| SocialError::new(SocialErrorKind::Driver(e.to_string())))?;
            let mut visible = false;
            for element in &elements {
                if element.is_displayed().await.unwrap_or(false) {
                    visible = true;
                    break;
                }
            }
            if !visible {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(SocialError::new(SocialErrorKind::ElementTimeout {
                    locator: format!("{} (gone)", locator),
                    timeout_secs: timeout.as_secs(),
                }));
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn send_keys(&mut self, element: &Element, text: &str) -> SocialResult<()> {
        element
            .send_keys(text)
            .await
            .map_err(|e| SocialError::new(SocialErrorKind::Interaction(e.to_string())))
    }

    async fn click(&mut self, element: &Element) -> SocialResult<()> {
        element
            .click()
            .await
            .map_err(|e| SocialError::new(SocialErrorKind::Interaction(e.to_string())))
    }

    async fn close(&mut self) -> SocialResult<()> {
        match self.client.take() {
            Some(client) => client
                .close()
                .await
                .map_err(|e| SocialError::new(SocialErrorKind::Driver(e.to_string()))),
            None => Ok(()),
        }
    }
}
