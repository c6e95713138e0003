//! JPEG normalization.

use easel_error::{StorageError, StorageErrorKind};
use image::ImageFormat;
use std::path::Path;

/// Rewrites the image at `path` in place as a 3-channel JPEG.
///
/// The source format is sniffed from the bytes, not the extension, so a PNG or
/// WebP saved under a `.jpg` name is handled. Returns the image dimensions.
pub fn transcode_to_jpeg(path: &Path) -> Result<(u32, u32), StorageError> {
    let bytes = std::fs::read(path).map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    let decoded = image::load_from_memory(&bytes).map_err(|e| {
        StorageError::new(StorageErrorKind::Decode(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    let rgb = decoded.into_rgb8();
    let dimensions = rgb.dimensions();
    rgb.save_with_format(path, ImageFormat::Jpeg).map_err(|e| {
        StorageError::new(StorageErrorKind::Encode(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    Ok(dimensions)
}
