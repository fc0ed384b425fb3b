//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate the size of an image shrunk to fit inside a square box.
///
/// Aspect ratio is preserved and images are never enlarged. The width is
/// constrained first, then the height; each scaled edge is truncated and
/// kept at least 1px.
///
/// # Arguments
/// * `source` - Natural image dimensions (width, height)
/// * `max_dim` - Edge length of the bounding box in pixels
///
/// # Returns
/// * `(width, height)` - Dimensions that fit within `max_dim x max_dim`
///
/// # Examples
/// ```
/// # use iv::imaging::fit_within;
/// // 800x600 into a 313px box → 313x234
/// assert_eq!(fit_within((800, 600), 313), (313, 234));
///
/// // Already small enough → unchanged
/// assert_eq!(fit_within((200, 100), 313), (200, 100));
/// ```
pub fn fit_within(source: (u32, u32), max_dim: u32) -> (u32, u32) {
    let max_dim = max_dim.max(1);
    let (mut w, mut h) = source;

    if w > max_dim {
        h = scale_edge(h, max_dim, w);
        w = max_dim;
    }
    if h > max_dim {
        w = scale_edge(w, max_dim, h);
        h = max_dim;
    }
    (w, h)
}

/// `edge * numerator / denominator`, truncated, at least 1.
fn scale_edge(edge: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = u64::from(edge) * u64::from(numerator) / u64::from(denominator.max(1));
    (scaled as u32).max(1)
}

/// Number of terminal lines an image of `pixel_height` should occupy.
///
/// Truncates, so images shorter than one line yield 0.
pub fn display_lines(pixel_height: u32, pixels_per_line: u32) -> u32 {
    pixel_height / pixels_per_line.max(1)
}

/// Maximum single-image dimension for a terminal `columns` cells wide.
///
/// The terminal width in pixels caps the user's requested size.
pub fn single_image_size(columns: u16, pixels_per_line: u32, requested: u32) -> u32 {
    (u32::from(columns) * pixels_per_line).min(requested)
}
