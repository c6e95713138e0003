//! Posting through a site's web UI with a scripted browser.
//!
//! The flow logs in, opens the post composer, selects the image, passes the
//! crop and filter steps, types the caption, and shares. Each required step
//! waits a bounded time for its element; optional dialogs are looked for with
//! [`try_dismiss`](crate::try_dismiss) and skipped when absent.

mod flow;
mod publisher;
mod settings;
mod state;

pub use flow::PostingFlow;
pub use publisher::WebUiPublisher;
pub use settings::{DEFAULT_LOGIN_URL, WebCredentials, WebUiLocators, WebUiSettings};
pub use state::PublishState;
