//! Publishing errors for the messaging bot and the web UI automation.

/// Social platform error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SocialErrorKind {
    /// Request could not be sent or the connection failed
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Telegram rejected the upload
    #[display("Telegram returned {}: {}", status, body)]
    Telegram {
        /// HTTP status code
        status: u16,
        /// Response body, kept as the diagnostic
        body: String,
    },

    /// Image could not be read for upload
    #[display("Failed to read image: {}", _0)]
    FileRead(String),

    /// WebDriver session could not be created or a command failed at the protocol level
    #[display("WebDriver error: {}", _0)]
    Driver(String),

    /// Element never reached the wanted condition
    #[display("Timed out after {}s waiting for {}", timeout_secs, locator)]
    ElementTimeout {
        /// Locator that was being waited on
        locator: String,
        /// Wait budget in seconds
        timeout_secs: u64,
    },

    /// Element was found but clicking or typing into it failed
    #[display("Interaction failed: {}", _0)]
    Interaction(String),

    /// Share control never went away after submission
    #[display("Timed out after {}s verifying the post was submitted", _0)]
    VerificationTimeout(u64),

    /// A publisher reported an unsuccessful post
    #[display("Publishing via {} failed: {}", channel, reason)]
    PublishFailed {
        /// Channel name of the publisher
        channel: String,
        /// Error the publisher reported
        reason: String,
    },
}

/// Social platform error with location tracking.
///
/// # Examples
///
/// ```
/// use easel_error::{SocialError, SocialErrorKind};
///
/// let err = SocialError::new(SocialErrorKind::ElementTimeout {
///     locator: "css `button[type='submit']`".to_string(),
///     timeout_secs: 30,
/// });
/// assert!(err.to_string().contains("Timed out after 30s"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Social Error: {} at {}:{}", kind, file, line)]
pub struct SocialError {
    /// The specific error kind
    pub kind: SocialErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl SocialError {
    /// Create a new social error.
    #[track_caller]
    pub fn new(kind: SocialErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for social operations.
pub type SocialResult<T> = Result<T, SocialError>;
