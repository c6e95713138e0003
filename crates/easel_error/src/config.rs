//! Configuration error types.

/// Configuration error with source location.
///
/// Raised at startup for missing secrets or an unreadable settings file.
/// These are the only errors that stop the process before a run begins.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use easel_error::ConfigError;
    ///
    /// let err = ConfigError::new("Missing environment variable: OPENROUTER_API_KEY");
    /// assert!(err.message.contains("OPENROUTER_API_KEY"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
