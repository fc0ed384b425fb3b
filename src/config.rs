//! Contact-sheet and display configuration.
//!
//! All layout and caption constants live in one immutable [`SheetConfig`]
//! value that is passed explicitly to the layout engine and the compositor.
//! There is no configuration file: the binary always uses
//! [`SheetConfig::default`], while tests construct their own values to
//! exercise the core with different spacings.
//!
//! ## Defaults
//!
//! ```text
//! min_tile_width   = 250   # narrowest column the grid will produce
//! h_spacing        = 20    # gap between columns
//! v_spacing        = 40    # gap below every row (caption band)
//! pixels_per_line  = 12    # terminal cell height used for sizing
//! caption_size     = 18.0  # caption font size in pixels per em
//! caption_offset   = 5     # gap between a tile and its caption
//! sheet_quality    = 75    # JPEG quality for composited sheets
//! ```

use crate::imaging::Quality;

/// Font files tried in order by the font resolver before falling back to the
/// builtin bitmap font.
pub const CAPTION_FONTS: &[&str] = &[
    "Helvetica.ttf",
    "helvetica.ttf",
    "arial.ttf",
    "OpenSans-Regular.ttf",
    "Arial.ttf",
];

/// Default maximum output width in pixels for single-image display.
pub const DEFAULT_SIZE: u32 = 1000;

/// Layout, caption and encoding constants shared by the sheet pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    /// Columns are never narrower than this (plus `h_spacing`).
    pub min_tile_width: u32,
    /// Horizontal gap between adjacent tiles.
    pub h_spacing: u32,
    /// Vertical space added below every row; captions are drawn into it.
    pub v_spacing: u32,
    /// Pixel height of one terminal line.
    pub pixels_per_line: u32,
    /// Caption font size in pixels per em.
    pub caption_size: f32,
    /// Distance between the bottom of a tile and the top of its caption.
    pub caption_offset: u32,
    pub caption_color: [u8; 3],
    pub background: [u8; 3],
    /// Font file names tried in order.
    pub fonts: &'static [&'static str],
    /// Lossy quality used when encoding composited sheets.
    pub sheet_quality: Quality,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            min_tile_width: 250,
            h_spacing: 20,
            v_spacing: 40,
            pixels_per_line: 12,
            caption_size: 18.0,
            caption_offset: 5,
            caption_color: [0, 0, 0],
            background: [255, 255, 255],
            fonts: CAPTION_FONTS,
            sheet_quality: Quality::new(75),
        }
    }
}

impl SheetConfig {
    /// Width of one grid column including its trailing gap.
    pub fn min_column_width(&self) -> u32 {
        self.min_tile_width + self.h_spacing
    }
}

/// Number of worker threads for parallel decoding: one per available core.
pub fn effective_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
