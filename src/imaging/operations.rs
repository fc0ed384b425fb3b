//! High-level image operations.
//!
//! These functions combine calculations with backend execution: loading one
//! image, loading a batch in parallel, and encoding a bitmap for display.

use super::backend::{BackendError, ImageBackend, SourceImage};
use super::params::EncodeParams;
use image::{DynamicImage, ImageFormat};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Load a single image, shrunk to fit within `max_dim x max_dim`.
pub fn load_image(backend: &impl ImageBackend, path: &Path, max_dim: u32) -> Result<SourceImage> {
    let started = Instant::now();
    let image = backend.load(path, max_dim)?;
    debug!(
        path = %path.display(),
        natural = ?(image.natural.width, image.natural.height),
        loaded = ?(image.width(), image.height()),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "loaded image"
    );
    Ok(image)
}

/// Load every path in parallel on the current rayon pool.
///
/// The result has the same length and order as `paths` regardless of which
/// decode finishes first. Any failure fails the whole batch; no partial
/// results are returned.
pub fn load_all(
    backend: &impl ImageBackend,
    paths: &[PathBuf],
    max_dim: u32,
) -> Result<Vec<SourceImage>> {
    paths
        .par_iter()
        .map(|path| load_image(backend, path, max_dim))
        .collect()
}

/// Pick the output format: the requested one, else the source's own, else PNG
/// when the candidate has no encoder compiled in.
pub fn resolve_format(requested: Option<ImageFormat>, native: Option<ImageFormat>) -> ImageFormat {
    requested
        .or(native)
        .filter(|format| format.writing_enabled())
        .unwrap_or(ImageFormat::Png)
}

/// Encode a bitmap for display.
pub fn encode_image(
    backend: &impl ImageBackend,
    bitmap: &DynamicImage,
    native: Option<ImageFormat>,
    params: &EncodeParams,
) -> Result<Vec<u8>> {
    let format = resolve_format(params.format, native);
    let bytes = backend.encode(bitmap, format, params.quality)?;
    debug!(?format, bytes = bytes.len(), "encoded image");
    Ok(bytes)
}
