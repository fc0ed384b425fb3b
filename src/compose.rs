//! Contact-sheet compositor.
//!
//! Allocates a canvas sized by the [`LayoutPlan`], pastes every tile at its
//! placement and writes its filename caption underneath.
//!
//! ```text
//! ┌──────────┐  20  ┌──────────┐  20  ┌──────────┐
//! │  tile 0  │      │  tile 1  │      │  tile 2  │
//! │          │      └──────────┘      │          │
//! └──────────┘        b.jpg           └──────────┘
//!    a.jpg                           (caption too wide: skipped)
//!                         40
//! ┌──────────┐
//! │  tile 3  │
//! ```
//!
//! Captions are centred on the column, never on the tile, so a narrow tile
//! (one that was smaller than the column and was not enlarged) sits at the
//! column's left edge with its caption in the middle of the column.

use crate::config::SheetConfig;
use crate::font::CaptionFont;
use crate::imaging::SourceImage;
use crate::layout::LayoutPlan;
use image::{Rgb, RgbImage};
use tracing::debug;

/// Composite `images` (in input order) onto a fresh canvas.
///
/// Images are consumed; each bitmap is dropped as soon as it has been pasted.
pub fn compose_sheet(
    images: Vec<SourceImage>,
    plan: &LayoutPlan,
    font: &dyn CaptionFont,
    config: &SheetConfig,
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(
        plan.canvas_width,
        plan.canvas_height,
        Rgb(config.background),
    );
    let caption_color = Rgb(config.caption_color);

    for (index, image) in images.into_iter().enumerate() {
        let (caption_width, _) = font.measure(&image.caption);
        let Some(placement) = plan.place(index, image.height(), caption_width) else {
            break;
        };

        image::imageops::replace(
            &mut canvas,
            &image.bitmap.to_rgb8(),
            i64::from(placement.x),
            i64::from(placement.y),
        );

        match placement.caption {
            Some((x, y)) => {
                font.draw(&mut canvas, x as i32, y as i32, caption_color, &image.caption)
            }
            None => debug!(
                index = placement.index,
                row = placement.row,
                column = placement.column,
                caption = %image.caption,
                caption_width,
                tile_width = plan.grid.tile_width,
                "caption wider than its column; not drawn"
            ),
        }
    }

    canvas
}
