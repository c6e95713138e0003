//! Model provider errors.
//!
//! Covers both the text-generation endpoint (idea and prompt) and the
//! image-generation endpoint.

/// Model provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// Request could not be sent or the connection failed
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Endpoint answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body did not match the expected schema
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),

    /// Endpoint succeeded but returned no usable text
    #[display("Empty content from {}", _0)]
    EmptyContent(String),

    /// Image endpoint answered with a shape we do not recognise
    #[display("Unexpected response format: {}", _0)]
    UnexpectedFormat(String),

    /// Image endpoint returned a path that is not on disk
    #[display("Local file path {} does not exist", _0)]
    MissingLocalFile(String),

    /// Gradio reported an error event for the job
    #[display("Gradio error: {}", _0)]
    Gradio(String),
}

/// Model provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
