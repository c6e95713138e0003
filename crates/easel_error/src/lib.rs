//! Error types for the Easel image pipeline.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Every domain error converts into [`EaselError`], so pipeline stages can use `?`
//! across crate boundaries.
//!
//! # Examples
//!
//! ```
//! use easel_error::{ConfigError, EaselResult};
//!
//! fn read_settings() -> EaselResult<String> {
//!     Err(ConfigError::new("Missing environment variable: OPENROUTER_API_KEY"))?
//! }
//!
//! assert!(read_settings().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod models;
mod social;
mod storage;

pub use config::ConfigError;
pub use error::{EaselError, EaselErrorKind, EaselResult};
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use social::{SocialError, SocialErrorKind, SocialResult};
pub use storage::{StorageError, StorageErrorKind};
