//! The posting state machine.

use super::settings::{WebCredentials, WebUiSettings};
use super::state::PublishState;
use crate::browser::{Browser, Locator, WaitCondition};
use crate::dialogs::try_dismiss;
use easel_error::{SocialError, SocialErrorKind, SocialResult};
use tracing::{debug, info, warn};

/// Drives one browser session from `Init` to `Verified`.
///
/// The flow borrows the session; opening and closing it is the caller's job.
pub struct PostingFlow<'a, B: Browser> {
    browser: &'a mut B,
    settings: &'a WebUiSettings,
    credentials: &'a WebCredentials,
    state: PublishState,
    failed_at: Option<PublishState>,
}

impl<'a, B: Browser> PostingFlow<'a, B> {
    /// Start a flow in `Init`.
    pub fn new(
        browser: &'a mut B,
        settings: &'a WebUiSettings,
        credentials: &'a WebCredentials,
    ) -> Self {
        Self {
            browser,
            settings,
            credentials,
            state: PublishState::Init,
            failed_at: None,
        }
    }

    /// Current state; `Failed` once a step has failed.
    pub fn state(&self) -> PublishState {
        self.state
    }

    /// State whose step failed, if any.
    pub fn failed_at(&self) -> Option<PublishState> {
        self.failed_at
    }

    /// Run every step until `Verified`.
    ///
    /// # Errors
    ///
    /// Returns the first step error. The flow is then in `Failed` and
    /// [`failed_at`](Self::failed_at) names the step.
    pub async fn run(&mut self, image_path: &str, caption: &str) -> SocialResult<()> {
        while !self.state.is_terminal() {
            if let Err(e) = self.step(image_path, caption).await {
                warn!(
                    from = %self.state,
                    to = %PublishState::Failed,
                    error = %e,
                    "Web UI transition"
                );
                self.failed_at = Some(self.state);
                self.state = PublishState::Failed;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Perform the action of the current state and advance.
    ///
    /// A failed step leaves the state unchanged; [`run`](Self::run) moves it to `Failed`.
    pub async fn step(&mut self, image_path: &str, caption: &str) -> SocialResult<PublishState> {
        let settings = self.settings;
        let credentials = self.credentials;
        let locators = &settings.locators;
        let dialogs = settings.dialog_policy();

        let current = self.state;
        match current {
            PublishState::Init => {
                self.browser.open(&settings.login_url).await?;
            }
            PublishState::DriverReady => {
                try_dismiss(&mut *self.browser, &locators.consent, &dialogs).await;
                self.type_into(
                    &locators.username,
                    WaitCondition::Present,
                    credentials.username(),
                )
                .await?;
                self.type_into(
                    &locators.password,
                    WaitCondition::Present,
                    credentials.password(),
                )
                .await?;
            }
            PublishState::Authenticating => {
                self.click_on(&locators.submit).await?;
                let saved = try_dismiss(&mut *self.browser, &locators.save_login, &dialogs).await;
                let notified = try_dismiss(&mut *self.browser, &locators.notifications, &dialogs).await;
                debug!(saved, notified, "Post-login dialogs handled");
            }
            PublishState::Authenticated => {
                self.click_on(&locators.new_post).await?;
            }
            PublishState::UploadStarted => {
                self.type_into(&locators.file_input, WaitCondition::Present, image_path)
                    .await?;
            }
            PublishState::FileSelected | PublishState::CropConfirmed => {
                self.click_on(&locators.next).await?;
            }
            PublishState::FiltersConfirmed => {
                let field = self
                    .browser
                    .find_and_wait(
                        &locators.caption,
                        WaitCondition::Clickable,
                        settings.step_timeout(),
                    )
                    .await?;
                self.browser.click(&field).await?;
                self.browser.send_keys(&field, caption).await?;
            }
            PublishState::CaptionEntered => {
                self.click_on(&locators.share).await?;
            }
            PublishState::Shared => {
                warn!(
                    "Verification is best-effort: only the share control disappearing is checked"
                );
                let timeout = settings.verify_timeout();
                self.browser
                    .wait_gone(&locators.share, timeout)
                    .await
                    .map_err(|e| match e.kind {
                        SocialErrorKind::ElementTimeout { .. } => SocialError::new(
                            SocialErrorKind::VerificationTimeout(timeout.as_secs()),
                        ),
                        _ => e,
                    })?;
            }
            PublishState::Verified | PublishState::Failed => return Ok(current),
        }

        if let Some(next) = current.successor() {
            info!(from = %current, to = %next, "Web UI transition");
            self.state = next;
        }
        Ok(self.state)
    }

    async fn click_on(&mut self, locator: &Locator) -> SocialResult<()> {
        let element = self
            .browser
            .find_and_wait(locator, WaitCondition::Clickable, self.settings.step_timeout())
            .await?;
        self.browser.click(&element).await
    }

    async fn type_into(
        &mut self,
        locator: &Locator,
        condition: WaitCondition,
        text: &str,
    ) -> SocialResult<()> {
        let element = self
            .browser
            .find_and_wait(locator, condition, self.settings.step_timeout())
            .await?;
        self.browser.send_keys(&element, text).await
    }
}
