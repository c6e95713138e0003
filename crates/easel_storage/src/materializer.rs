//! Filesystem image materializer.

use crate::transcode::transcode_to_jpeg;
use async_trait::async_trait;
use easel_core::{ImageReference, MaterializedImage};
use easel_error::{EaselResult, StorageError, StorageErrorKind};
use easel_interface::ImageMaterializer;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Timeout for fetching a hosted image.
pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Writes generated images into a directory as JPEGs.
///
/// Published images are never cleaned up; callers own the directory. A file
/// that fails to transcode is removed.
#[derive(Debug, Clone)]
pub struct FileSystemMaterializer {
    client: reqwest::Client,
    output_dir: PathBuf,
}

impl FileSystemMaterializer {
    /// Create a materializer writing into `output_dir`.
    ///
    /// The directory is created on first use if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(output_dir: impl Into<PathBuf>) -> EaselResult<Self> {
        Self::with_timeout(output_dir, DEFAULT_DOWNLOAD_TIMEOUT)
    }

    /// Create a materializer with a custom download timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_timeout(output_dir: impl Into<PathBuf>, timeout: Duration) -> EaselResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StorageError::new(StorageErrorKind::Download(e.to_string())))?;

        Ok(Self {
            client,
            output_dir: output_dir.into(),
        })
    }

    /// Directory images are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    async fn download(&self, url: &str, destination: &Path) -> Result<(), StorageError> {
        debug!(url, "Downloading image");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StorageError::new(StorageErrorKind::Download(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::new(StorageErrorKind::Download(format!(
                "{} returned {}",
                url, status
            ))));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StorageError::new(StorageErrorKind::Download(e.to_string())))?;

        tokio::fs::write(destination, &bytes).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                destination.display(),
                e
            )))
        })
    }

    async fn copy(&self, source: &Path, destination: &Path) -> Result<(), StorageError> {
        if !tokio::fs::try_exists(source).await.unwrap_or(false) {
            return Err(StorageError::new(StorageErrorKind::NotFound(
                source.display().to_string(),
            )));
        }
        debug!(source = %source.display(), "Copying image");
        tokio::fs::copy(source, destination)
            .await
            .map(|_| ())
            .map_err(|e| {
                StorageError::new(StorageErrorKind::FileCopy(format!(
                    "{} -> {}: {}",
                    source.display(),
                    destination.display(),
                    e
                )))
            })
    }
}

#[async_trait]
impl ImageMaterializer for FileSystemMaterializer {
    #[instrument(skip(self, reference), fields(kind = reference.kind(), output_dir = %self.output_dir.display()))]
    async fn materialize(
        &self,
        reference: &ImageReference,
        destination_name: &str,
    ) -> EaselResult<MaterializedImage> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    self.output_dir.display(),
                    e
                )))
            })?;

        let destination = self.output_dir.join(destination_name);
        match reference {
            ImageReference::RemoteUrl(url) => self.download(url, &destination).await?,
            ImageReference::LocalPath(path) => self.copy(path, &destination).await?,
        }

        let target = destination.clone();
        let transcoded = tokio::task::spawn_blocking(move || transcode_to_jpeg(&target))
            .await
            .map_err(|e| StorageError::new(StorageErrorKind::Task(e.to_string())))
            .and_then(|result| result);
        let (width, height) = match transcoded {
            Ok(dimensions) => dimensions,
            Err(e) => {
                if let Err(remove) = tokio::fs::remove_file(&destination).await {
                    warn!(
                        path = %destination.display(),
                        error = %remove,
                        "Could not remove undecodable file"
                    );
                }
                return Err(e.into());
            }
        };

        info!(path = %destination.display(), width, height, "Image saved");
        Ok(MaterializedImage::jpeg(destination, width, height))
    }
}
