//! Image materialization for Easel.
//!
//! Generated images arrive either as a path on disk or as a hosted URL. The
//! [`FileSystemMaterializer`] brings either into the output directory and
//! normalizes it to an RGB JPEG so every publisher sees the same format.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod materializer;
mod transcode;

pub use easel_error::{StorageError, StorageErrorKind};
pub use materializer::{DEFAULT_DOWNLOAD_TIMEOUT, FileSystemMaterializer};
pub use transcode::transcode_to_jpeg;
