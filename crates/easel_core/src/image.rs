//! Image references and materialized images.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pointer to a generated image that is not yet in the output directory.
///
/// The image endpoint answers either with a path on the local filesystem or
/// with a hosted URL; both are carried here so the materializer can handle them
/// without re-inspecting the raw response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ImageReference {
    /// File already on the local filesystem
    #[display("{}", _0.display())]
    LocalPath(PathBuf),
    /// Hosted file reachable over HTTP(S)
    #[display("{}", _0)]
    RemoteUrl(String),
}

impl ImageReference {
    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LocalPath(_) => "local_path",
            Self::RemoteUrl(_) => "remote_url",
        }
    }
}

/// On-disk format of a materialized image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ImageFormat {
    /// Baseline JPEG, 3-channel RGB
    #[display("jpeg")]
    Jpeg,
}

/// Normalized image written for one run.
///
/// Nothing deletes these files; one accumulates per successful run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MaterializedImage {
    /// Location of the JPEG
    path: PathBuf,
    /// Always [`ImageFormat::Jpeg`]
    format: ImageFormat,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

impl MaterializedImage {
    /// Describes a JPEG that has been written to `path`.
    pub fn jpeg(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            format: ImageFormat::Jpeg,
            width,
            height,
        }
    }
}
