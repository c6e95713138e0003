//! Publish outcomes.

use serde::{Deserialize, Serialize};

/// Outcome of one publish attempt.
///
/// # Examples
///
/// ```
/// use easel_core::PublishResult;
///
/// let ok = PublishResult::succeeded();
/// assert!(ok.success);
///
/// let failed = PublishResult::failed("HTTP 400: chat not found");
/// assert!(!failed.success);
/// assert_eq!(failed.error.as_deref(), Some("HTTP 400: chat not found"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResult {
    /// Whether the image was delivered
    pub success: bool,
    /// Diagnostic when delivery failed
    pub error: Option<String>,
}

impl PublishResult {
    /// A successful delivery.
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// A failed delivery with a diagnostic.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}
