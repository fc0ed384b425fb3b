//! Parameter types for image operations.
//!
//! These structs describe *what* to produce, not *how*. They sit between the
//! pipeline (which decides whether it is emitting a single image or a sheet)
//! and the [`backend`](super::backend) that does the pixel work.
//!
//! - [`Quality`] — Lossy encoding quality (1–100, default 75). Clamped on construction.
//! - [`EncodeParams`] — Target format (or "keep the source format") plus quality.

use image::ImageFormat;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(75)
    }
}

/// How to serialize a bitmap for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeParams {
    /// `None` keeps the format the source was decoded from.
    pub format: Option<ImageFormat>,
    pub quality: Quality,
}

impl EncodeParams {
    /// Re-encode in whatever format the source came in.
    pub fn native() -> Self {
        Self::default()
    }

    /// Lossy JPEG, used for composited sheets.
    pub fn jpeg(quality: Quality) -> Self {
        Self {
            format: Some(ImageFormat::Jpeg),
            quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_75() {
        assert_eq!(Quality::default().value(), 75);
    }

    #[test]
    fn native_has_no_format() {
        assert_eq!(EncodeParams::native().format, None);
    }

    #[test]
    fn jpeg_params() {
        let params = EncodeParams::jpeg(Quality::new(90));
        assert_eq!(params.format, Some(ImageFormat::Jpeg));
        assert_eq!(params.quality.value(), 90);
    }
}
