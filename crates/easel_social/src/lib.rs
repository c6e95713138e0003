//! Publishing integrations for Easel.
//!
//! Two channels deliver a finished image and caption:
//! - [`TelegramPublisher`] - one `sendPhoto` call to the Telegram bot API
//! - [`WebUiPublisher`] - a browser session that walks the site's posting flow
//!
//! The web UI publisher is generic over [`BrowserFactory`]; production code
//! uses [`WebDriverFactory`] (fantoccini over any W3C WebDriver), tests use
//! scripted browsers.

#![warn(missing_docs)]

mod browser;
mod dialogs;
mod telegram;
mod web_ui;
mod webdriver;

pub use browser::{Browser, BrowserFactory, Locator, WaitCondition};
pub use dialogs::{DialogPolicy, try_dismiss};
pub use telegram::{TELEGRAM_API_BASE, TELEGRAM_CAPTION_LIMIT, TelegramPublisher};
pub use web_ui::{
    DEFAULT_LOGIN_URL, PostingFlow, PublishState, WebCredentials, WebUiLocators, WebUiPublisher,
    WebUiSettings,
};
pub use webdriver::{WebDriverBrowser, WebDriverFactory};
