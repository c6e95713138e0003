//! Storage error types.

/// Kinds of storage errors raised while materializing images.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the output directory
    #[display("Failed to create output directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Failed to copy a local image into place
    #[display("Failed to copy file: {}", _0)]
    FileCopy(String),
    /// Image source is neither a reachable URL nor an existing path
    #[display("Image source not found: {}", _0)]
    NotFound(String),
    /// Remote image could not be fetched
    #[display("Failed to download image: {}", _0)]
    Download(String),
    /// Bytes on disk are not a decodable image
    #[display("Failed to decode image: {}", _0)]
    Decode(String),
    /// Re-encoding as JPEG failed
    #[display("Failed to encode JPEG: {}", _0)]
    Encode(String),
    /// Background transcode task did not complete
    #[display("Transcode task failed: {}", _0)]
    Task(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use easel_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("/tmp/missing.png".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
