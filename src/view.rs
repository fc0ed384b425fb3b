//! Display pipelines.
//!
//! ```text
//! one path:    load (fit to min(columns*12, size)) → encode (source format) → display
//! many paths:  grid → load_all (fit to tile width) → plan → compose → encode (JPEG) → display
//! ```
//!
//! Both pipelines are all-or-nothing: a missing path or a single decode
//! failure aborts before anything is written to the terminal.
//!
//! In sheet mode the viewport is always the full terminal width; the
//! `--size` limit only applies to single images. That asymmetry is inherited
//! behavior and is kept on purpose.

use crate::compose::compose_sheet;
use crate::config::SheetConfig;
use crate::display::{DisplayError, InlineImageDisplay};
use crate::font::CaptionFont;
use crate::imaging::{
    BackendError, EncodeParams, ImageBackend, display_lines, encode_image, load_all, load_image,
    single_image_size,
};
use crate::layout::{LayoutPlan, SheetGrid};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error(transparent)]
    Display(#[from] DisplayError),
}

/// Which pipeline an invocation takes, and at what size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// One image, fit within `max_dim x max_dim`.
    Single { max_dim: u32 },
    /// Contact sheet laid out across `viewport_width` pixels.
    Sheet { viewport_width: u32 },
}

impl ViewMode {
    /// Decide the mode from the number of paths, the requested size and the
    /// terminal width in columns.
    pub fn select(path_count: usize, size: u32, columns: u16, config: &SheetConfig) -> Self {
        if path_count == 1 {
            ViewMode::Single {
                max_dim: single_image_size(columns, config.pixels_per_line, size),
            }
        } else {
            ViewMode::Sheet {
                viewport_width: u32::from(columns) * config.pixels_per_line,
            }
        }
    }
}

fn ensure_exists(path: &Path) -> Result<(), ViewError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ViewError::NotFound(path.to_path_buf()))
    }
}

/// Show one image, re-encoded in its own format.
pub fn show_single(
    backend: &impl ImageBackend,
    display: &mut impl InlineImageDisplay,
    path: &Path,
    max_dim: u32,
    config: &SheetConfig,
) -> Result<(), ViewError> {
    ensure_exists(path)?;
    let image = load_image(backend, path, max_dim)?;
    let payload = encode_image(backend, &image.bitmap, image.format, &EncodeParams::native())?;
    display.show(&payload, display_lines(image.height(), config.pixels_per_line))?;
    Ok(())
}

/// Show several images as one captioned contact sheet.
pub fn show_sheet(
    backend: &impl ImageBackend,
    display: &mut impl InlineImageDisplay,
    font: &dyn CaptionFont,
    paths: &[PathBuf],
    viewport_width: u32,
    config: &SheetConfig,
) -> Result<(), ViewError> {
    for path in paths {
        ensure_exists(path)?;
    }

    let grid = SheetGrid::for_viewport(viewport_width, config);
    debug!(
        viewport_width,
        columns = grid.columns,
        tile_width = grid.tile_width,
        images = paths.len(),
        "sheet grid"
    );

    let images = load_all(backend, paths, grid.tile_width)?;
    let heights: Vec<u32> = images.iter().map(|image| image.height()).collect();
    let plan = LayoutPlan::new(grid, &heights, config);
    debug!(
        rows = plan.rows(),
        canvas_width = plan.canvas_width,
        canvas_height = plan.canvas_height,
        "sheet layout"
    );

    let canvas = compose_sheet(images, &plan, font, config);
    let payload = encode_image(
        backend,
        &DynamicImage::ImageRgb8(canvas),
        None,
        &EncodeParams::jpeg(config.sheet_quality),
    )?;
    display.show(&payload, display_lines(plan.canvas_height, config.pixels_per_line))?;
    Ok(())
}
