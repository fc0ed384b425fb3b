//! Image backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the viewer needs from
//! an image codec: load (decode + fit to a bounding box) and encode.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) on top of the `image`
//! crate. Tests swap in a recording mock so loader ordering and failure
//! policy can be checked without touching the filesystem.

use super::params::Quality;
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("Encoding failed: {0}")]
    Encode(String),
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// A decoded image, already shrunk to fit the box it was loaded for.
///
/// Immutable once loaded; ownership moves from the loader to the layout and
/// compositing stages and the bitmap is dropped after it has been pasted.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub path: PathBuf,
    /// Caption text: the path's basename, extension kept.
    pub caption: String,
    /// Dimensions before resizing.
    pub natural: Dimensions,
    /// Format detected from the file contents, if any.
    pub format: Option<ImageFormat>,
    pub bitmap: DynamicImage,
}

impl SourceImage {
    pub fn new(
        path: &Path,
        bitmap: DynamicImage,
        natural: Dimensions,
        format: Option<ImageFormat>,
    ) -> Self {
        Self {
            path: path.to_path_buf(),
            caption: caption_for(path),
            natural,
            format,
            bitmap,
        }
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }
}

/// Basename of `path` as supplied on the command line.
pub fn caption_for(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Trait for image codec backends.
///
/// `Sync` so one backend can be shared by every worker in the decode pool.
pub trait ImageBackend: Sync {
    /// Decode `path` and shrink it to fit within `max_dim x max_dim`.
    fn load(&self, path: &Path, max_dim: u32) -> Result<SourceImage, BackendError>;

    /// Serialize a bitmap in `format`. `quality` applies to lossy formats only.
    fn encode(
        &self,
        bitmap: &DynamicImage,
        format: ImageFormat,
        quality: Quality,
    ) -> Result<Vec<u8>, BackendError>;
}
