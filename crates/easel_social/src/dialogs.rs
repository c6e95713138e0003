//! Optional dialog dismissal.

use crate::browser::{Browser, Locator, WaitCondition};
use std::time::Duration;
use tracing::debug;

/// Lookup policy for dialogs that may or may not appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogPolicy {
    /// Number of lookups before giving up
    pub max_attempts: u32,
    /// Sleep between lookups
    pub pause: Duration,
    /// Wait budget of each lookup
    pub lookup_timeout: Duration,
}

impl Default for DialogPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            pause: Duration::from_secs(2),
            lookup_timeout: Duration::from_secs(5),
        }
    }
}

/// Clicks the dialog control at `locator` if it shows up.
///
/// Returns `true` once a click lands, `false` when every attempt came up empty.
/// A `false` is an observation, not an error: the caller carries on either way.
pub async fn try_dismiss<B: Browser>(
    browser: &mut B,
    locator: &Locator,
    policy: &DialogPolicy,
) -> bool {
    for attempt in 1..=policy.max_attempts {
        match browser
            .find_and_wait(locator, WaitCondition::Clickable, policy.lookup_timeout)
            .await
        {
            Ok(element) => match browser.click(&element).await {
                Ok(()) => {
                    debug!(%locator, attempt, "Dismissed dialog");
                    return true;
                }
                Err(e) => debug!(%locator, attempt, error = %e, "Dialog click failed"),
            },
            Err(e) => debug!(%locator, attempt, error = %e, "Dialog not shown"),
        }

        if attempt < policy.max_attempts {
            tokio::time::sleep(policy.pause).await;
        }
    }

    debug!(%locator, "Dialog absent, continuing");
    false
}
