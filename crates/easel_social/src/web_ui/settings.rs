//! Web UI settings: URLs, timeouts, dialog policy, and locators.

use crate::browser::Locator;
use crate::dialogs::DialogPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Login page loaded at the start of every session.
pub const DEFAULT_LOGIN_URL: &str = "https://www.instagram.com/accounts/login/";

/// Element locators for each step of the posting flow.
///
/// Defaults target Instagram's web UI. Any entry can be overridden from the
/// settings file, e.g.
///
/// ```toml
/// [web.locators]
/// share = { by = "xpath", value = "//button[text()='Share']" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebUiLocators {
    /// Optional cookie-consent button
    pub consent: Locator,
    /// Username input
    pub username: Locator,
    /// Password input
    pub password: Locator,
    /// Login submit button
    pub submit: Locator,
    /// Optional "save login info" dismissal
    pub save_login: Locator,
    /// Optional notifications prompt dismissal
    pub notifications: Locator,
    /// Control that opens the post composer
    pub new_post: Locator,
    /// Hidden file input of the composer
    pub file_input: Locator,
    /// "Next" button, used on both the crop and the filter step
    pub next: Locator,
    /// Caption text area
    pub caption: Locator,
    /// Share button; its disappearance is the completion signal
    pub share: Locator,
}

impl Default for WebUiLocators {
    fn default() -> Self {
        Self {
            consent: Locator::xpath("//button[text()='Allow all cookies']"),
            username: Locator::css("input[name='username']"),
            password: Locator::css("input[name='password']"),
            submit: Locator::css("button[type='submit']"),
            save_login: Locator::xpath("//div[@role='button' and text()='Not now']"),
            notifications: Locator::xpath("//button[text()='Not Now']"),
            new_post: Locator::css("svg[aria-label='New post']"),
            file_input: Locator::css("input[type='file']"),
            next: Locator::xpath("//div[@role='button' and text()='Next']"),
            caption: Locator::css("div[aria-label='Write a caption...']"),
            share: Locator::xpath("//div[@role='button' and text()='Share']"),
        }
    }
}

/// Tunables of the web UI publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebUiSettings {
    /// Page opened first
    pub login_url: String,
    /// Bound on each required element wait
    pub step_timeout_secs: u64,
    /// Bound on each optional dialog lookup
    pub dialog_timeout_secs: u64,
    /// Pause between dialog lookups
    pub dialog_pause_ms: u64,
    /// Dialog lookups before giving up
    pub dialog_attempts: u32,
    /// Bound on waiting for the share control to disappear
    pub verify_timeout_secs: u64,
    /// Element locators
    pub locators: WebUiLocators,
}

impl Default for WebUiSettings {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.to_string(),
            step_timeout_secs: 30,
            dialog_timeout_secs: 5,
            dialog_pause_ms: 2000,
            dialog_attempts: 2,
            verify_timeout_secs: 30,
            locators: WebUiLocators::default(),
        }
    }
}

impl WebUiSettings {
    /// Wait bound of required steps.
    pub fn step_timeout(&self) -> Duration {
        Duration::from_secs(self.step_timeout_secs)
    }

    /// Wait bound of the completion check.
    pub fn verify_timeout(&self) -> Duration {
        Duration::from_secs(self.verify_timeout_secs)
    }

    /// Lookup policy of optional dialogs.
    pub fn dialog_policy(&self) -> DialogPolicy {
        DialogPolicy {
            max_attempts: self.dialog_attempts,
            pause: Duration::from_millis(self.dialog_pause_ms),
            lookup_timeout: Duration::from_secs(self.dialog_timeout_secs),
        }
    }
}

/// Account used to log in.
#[derive(Clone, PartialEq, Eq)]
pub struct WebCredentials {
    username: String,
    password: String,
}

impl WebCredentials {
    /// Create credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Account name.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for WebCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
