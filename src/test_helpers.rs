//! Shared test utilities for the iv test suite.
//!
//! Provides fixture writers that synthesize real image files into a temp
//! directory, and pixel inspection helpers for compositor assertions.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! let paths = write_fixtures(tmp.path(), &[("a.jpg", 800, 600), ("b.png", 300, 200)]);
//! assert_eq!(paths.len(), 2);
//! ```

use image::{ImageEncoder, Rgb, RgbImage};
use std::path::{Path, PathBuf};

// =========================================================================
// Fixture writers
// =========================================================================

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]))
}

/// Create a small valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = gradient(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a small valid PNG file with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    gradient(width, height)
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

/// Write one fixture per `(name, width, height)`; the extension picks the
/// encoder (`.png` → PNG, anything else → JPEG). Returns paths in input order.
pub fn write_fixtures(dir: &Path, specs: &[(&str, u32, u32)]) -> Vec<PathBuf> {
    specs
        .iter()
        .map(|&(name, width, height)| {
            let path = dir.join(name);
            if name.ends_with(".png") {
                create_test_png(&path, width, height);
            } else {
                create_test_jpeg(&path, width, height);
            }
            path
        })
        .collect()
}

// =========================================================================
// Pixel inspection
// =========================================================================

/// Count pixels in `[x0, x1) x [y0, y1)` that differ from `background`.
pub fn count_non_background(
    canvas: &RgbImage,
    background: [u8; 3],
    (x0, y0): (u32, u32),
    (x1, y1): (u32, u32),
) -> usize {
    let mut count = 0;
    for y in y0..y1.min(canvas.height()) {
        for x in x0..x1.min(canvas.width()) {
            if canvas.get_pixel(x, y).0 != background {
                count += 1;
            }
        }
    }
    count
}
