//! Top-level error wrapper types.

use crate::{ConfigError, ModelsError, SocialError, StorageError};

/// Every failure a pipeline stage can report.
///
/// # Examples
///
/// ```
/// use easel_error::{EaselError, ModelsError, ModelsErrorKind};
///
/// let models_err = ModelsError::new(ModelsErrorKind::Http("Connection failed".to_string()));
/// let err: EaselError = models_err.into();
/// assert!(format!("{}", err).contains("Connection failed"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum EaselErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Text or image model error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Image materialization error
    #[from(StorageError)]
    Storage(StorageError),
    /// Publishing error
    #[from(SocialError)]
    Social(SocialError),
}

/// Easel error with kind discrimination.
///
/// # Examples
///
/// ```
/// use easel_error::{ConfigError, EaselErrorKind, EaselResult};
///
/// fn might_fail() -> EaselResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), EaselErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Easel Error: {}", _0)]
pub struct EaselError(Box<EaselErrorKind>);

impl EaselError {
    /// Create a new error from a kind.
    pub fn new(kind: EaselErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &EaselErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to EaselErrorKind
impl<T> From<T> for EaselError
where
    T: Into<EaselErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Easel operations.
pub type EaselResult<T> = std::result::Result<T, EaselError>;
