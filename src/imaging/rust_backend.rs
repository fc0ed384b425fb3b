//! Pure Rust image backend on top of the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP, GIF, BMP) | `image::ImageReader` with content sniffing |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3`, dimensions from [`fit_within`] |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` with explicit quality |
//! | Encode → other | `DynamicImage::write_to` |

use super::backend::{BackendError, Dimensions, ImageBackend, SourceImage};
use super::calculations::fit_within;
use super::params::Quality;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Backend using the `image` crate's decoders and encoders.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open `path` and decode it, sniffing the format from the file contents.
fn decode(path: &Path) -> Result<(DynamicImage, Option<ImageFormat>), BackendError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let bitmap = reader.decode().map_err(|e| BackendError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok((bitmap, format))
}

impl ImageBackend for RustBackend {
    fn load(&self, path: &Path, max_dim: u32) -> Result<SourceImage, BackendError> {
        let (bitmap, format) = decode(path)?;
        let natural = Dimensions {
            width: bitmap.width(),
            height: bitmap.height(),
        };

        let (width, height) = fit_within((natural.width, natural.height), max_dim);
        let bitmap = if (width, height) == (natural.width, natural.height) {
            bitmap
        } else {
            bitmap.resize_exact(width, height, FilterType::Lanczos3)
        };

        Ok(SourceImage::new(path, bitmap, natural, format))
    }

    fn encode(
        &self,
        bitmap: &DynamicImage,
        format: ImageFormat,
        quality: Quality,
    ) -> Result<Vec<u8>, BackendError> {
        let mut buf = Cursor::new(Vec::new());
        let result = match format {
            // JPEG has no alpha channel; flatten before handing it to the encoder.
            ImageFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut buf, quality.value());
                DynamicImage::ImageRgb8(bitmap.to_rgb8()).write_with_encoder(encoder)
            }
            other => bitmap.write_to(&mut buf, other),
        };
        result.map_err(|e| BackendError::Encode(format!("{format:?}: {e}")))?;
        Ok(buf.into_inner())
    }
}
