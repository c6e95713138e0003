//! Narrow browser-automation interface used by the web UI publisher.

use async_trait::async_trait;
use easel_error::SocialResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How to find an element on the page.
///
/// Serialized as `{ by = "css", value = "..." }` in settings files.
///
/// # Examples
///
/// ```
/// use easel_social::Locator;
///
/// let submit = Locator::css("button[type='submit']");
/// assert_eq!(submit.to_string(), "css `button[type='submit']`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "by", content = "value", rename_all = "lowercase")]
pub enum Locator {
    /// CSS selector
    #[display("css `{}`", _0)]
    Css(String),
    /// XPath expression, for matching on visible text
    #[display("xpath `{}`", _0)]
    XPath(String),
}

impl Locator {
    /// CSS selector locator.
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// XPath locator.
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::XPath(expression.into())
    }
}

/// What an element has to satisfy before a wait ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum WaitCondition {
    /// In the DOM, possibly hidden (file inputs)
    #[display("present")]
    Present,
    /// Displayed and enabled
    #[display("clickable")]
    Clickable,
}

/// A live browser session.
///
/// Implementations report a wait that runs out as
/// [`easel_error::SocialErrorKind::ElementTimeout`] and a failed click or
/// keystroke as [`easel_error::SocialErrorKind::Interaction`].
#[async_trait]
pub trait Browser: Send {
    /// Handle to a located element.
    type Element: Send + Sync;

    /// Navigate to `url`.
    async fn open(&mut self, url: &str) -> SocialResult<()>;

    /// Wait up to `timeout` for an element matching `locator` to meet `condition`.
    async fn find_and_wait(
        &mut self,
        locator: &Locator,
        condition: WaitCondition,
        timeout: Duration,
    ) -> SocialResult<Self::Element>;

    /// Wait up to `timeout` for every element matching `locator` to be gone or hidden.
    async fn wait_gone(&mut self, locator: &Locator, timeout: Duration) -> SocialResult<()>;

    /// Type `text` into the element.
    async fn send_keys(&mut self, element: &Self::Element, text: &str) -> SocialResult<()>;

    /// Click the element.
    async fn click(&mut self, element: &Self::Element) -> SocialResult<()>;

    /// End the session. Called exactly once per session.
    async fn close(&mut self) -> SocialResult<()>;
}

/// Starts fresh browser sessions; one per publish attempt.
#[async_trait]
pub trait BrowserFactory: Send + Sync {
    /// Session type produced.
    type Browser: Browser;

    /// Start a new session.
    async fn launch(&self) -> SocialResult<Self::Browser>;
}
