//! Contact-sheet layout engine.
//!
//! Layout happens in two steps because loading sits in between:
//!
//! ```text
//! viewport width ──► SheetGrid { columns, tile_width }
//!                        │
//!                        ▼   images are loaded to fit tile_width
//! tile heights ────► LayoutPlan { row_heights, canvas size }
//!                        │
//!                        ▼
//!                    Placement per tile (position + caption origin)
//! ```
//!
//! ## Rules
//!
//! - `columns = max(1, floor(V / (min_tile_width + h_spacing)))`
//! - `tile_width = floor(V / columns) - h_spacing`
//! - Tiles fill rows left to right in input order; the last row may be short.
//! - A row is as tall as its tallest tile.
//! - `canvas_width = columns * (tile_width + h_spacing) - h_spacing`
//! - `canvas_height = sum(row_heights) + rows * v_spacing`
//!
//! Every tile occupies `[x, x + tile_width)` horizontally, so neighbours in
//! a row are always separated by exactly `h_spacing` pixels. Nothing here
//! fails: any viewport and any tile count produce a plan.

use crate::config::SheetConfig;

/// Column count and shared tile width for a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetGrid {
    pub columns: u32,
    pub tile_width: u32,
}

impl SheetGrid {
    /// Decide the grid for a viewport `viewport_width` pixels wide.
    pub fn for_viewport(viewport_width: u32, config: &SheetConfig) -> Self {
        let columns = (viewport_width / config.min_column_width().max(1)).max(1);
        let tile_width = (viewport_width / columns)
            .saturating_sub(config.h_spacing)
            .max(1);
        Self {
            columns,
            tile_width,
        }
    }
}

/// Where one tile and its caption land on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub row: usize,
    pub column: u32,
    /// Top-left corner of the tile.
    pub x: u32,
    pub y: u32,
    /// Top-left corner of the caption, or `None` when it is wider than the
    /// tile and must not be drawn.
    pub caption: Option<(u32, u32)>,
}

/// Complete sheet geometry for a batch of tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    pub grid: SheetGrid,
    pub row_heights: Vec<u32>,
    pub canvas_width: u32,
    pub canvas_height: u32,
    h_spacing: u32,
    caption_offset: u32,
    row_tops: Vec<u32>,
    tiles: usize,
}

impl LayoutPlan {
    /// Build the plan from the heights of the loaded tiles, in input order.
    pub fn new(grid: SheetGrid, tile_heights: &[u32], config: &SheetConfig) -> Self {
        let row_heights: Vec<u32> = tile_heights
            .chunks(grid.columns.max(1) as usize)
            .map(|row| row.iter().copied().max().unwrap_or(0))
            .collect();

        let mut row_tops = Vec::with_capacity(row_heights.len());
        let mut top = 0;
        for height in &row_heights {
            row_tops.push(top);
            top += height + config.v_spacing;
        }

        let canvas_width =
            (grid.columns * (grid.tile_width + config.h_spacing)).saturating_sub(config.h_spacing);
        let canvas_height = top;

        Self {
            grid,
            row_heights,
            canvas_width,
            canvas_height,
            h_spacing: config.h_spacing,
            caption_offset: config.caption_offset,
            row_tops,
            tiles: tile_heights.len(),
        }
    }

    pub fn rows(&self) -> usize {
        self.row_heights.len()
    }

    /// Top-left corner of tile `index`, or `None` past the last tile.
    pub fn tile_origin(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.tiles {
            return None;
        }
        let columns = self.grid.columns.max(1) as usize;
        let (row, column) = (index / columns, (index % columns) as u32);
        let x = column * (self.grid.tile_width + self.h_spacing);
        Some((x, self.row_tops[row]))
    }

    /// Place tile `index` whose bitmap is `tile_height` tall and whose caption
    /// measures `caption_width` pixels.
    ///
    /// The caption is centred on the column and sits `caption_offset` pixels
    /// below the tile's own bottom edge. A caption wider than the tile is
    /// dropped rather than allowed to spill into the neighbouring column.
    pub fn place(&self, index: usize, tile_height: u32, caption_width: u32) -> Option<Placement> {
        let (x, y) = self.tile_origin(index)?;
        let columns = self.grid.columns.max(1) as usize;

        let caption = (caption_width <= self.grid.tile_width).then(|| {
            let padding = (self.grid.tile_width - caption_width) / 2;
            (x + padding, y + tile_height + self.caption_offset)
        });

        Some(Placement {
            index,
            row: index / columns,
            column: (index % columns) as u32,
            x,
            y,
            caption,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SheetConfig {
        SheetConfig::default()
    }

    // =========================================================================
    // SheetGrid tests
    // =========================================================================

    #[test]
    fn grid_for_default_terminal() {
        // 80 columns * 12px = 960 → 3 columns of 300px
        let grid = SheetGrid::for_viewport(960, &config());
        assert_eq!(grid, SheetGrid { columns: 3, tile_width: 300 });
    }

    #[test]
    fn grid_for_1000px() {
        let grid = SheetGrid::for_viewport(1000, &config());
        assert_eq!(grid, SheetGrid { columns: 3, tile_width: 313 });
    }

    #[test]
    fn grid_columns_follow_floor_rule() {
        for viewport in (270..5000).step_by(37) {
            let grid = SheetGrid::for_viewport(viewport, &config());
            assert_eq!(grid.columns, viewport / 270, "viewport {viewport}");
            assert!(grid.tile_width >= 250, "viewport {viewport}");
        }
    }

    #[test]
    fn grid_narrow_viewport_clamps_to_one_column() {
        let grid = SheetGrid::for_viewport(200, &config());
        assert_eq!(grid, SheetGrid { columns: 1, tile_width: 180 });
    }

    #[test]
    fn grid_tiny_viewport_keeps_positive_width() {
        let grid = SheetGrid::for_viewport(12, &config());
        assert_eq!(grid, SheetGrid { columns: 1, tile_width: 1 });
    }

    #[test]
    fn grid_respects_overridden_spacing() {
        let config = SheetConfig {
            min_tile_width: 90,
            h_spacing: 10,
            ..SheetConfig::default()
        };
        let grid = SheetGrid::for_viewport(1000, &config);
        assert_eq!(grid, SheetGrid { columns: 10, tile_width: 90 });
    }

    // =========================================================================
    // LayoutPlan tests
    // =========================================================================

    #[test]
    fn plan_four_landscape_images_at_1000px() {
        let grid = SheetGrid::for_viewport(1000, &config());
        let plan = LayoutPlan::new(grid, &[234, 234, 234, 234], &config());

        assert_eq!(plan.rows(), 2);
        assert_eq!(plan.row_heights, vec![234, 234]);
        assert_eq!(plan.canvas_width, 979);
        assert_eq!(plan.canvas_height, 548);
    }

    #[test]
    fn plan_row_height_is_row_maximum() {
        let grid = SheetGrid { columns: 2, tile_width: 300 };
        let plan = LayoutPlan::new(grid, &[100, 250, 80, 40, 300], &config());

        assert_eq!(plan.row_heights, vec![250, 80, 300]);
        assert_eq!(plan.canvas_height, 250 + 80 + 300 + 3 * 40);
    }

    #[test]
    fn plan_canvas_invariant_holds_for_many_distributions() {
        let config = config();
        for columns in 1..6 {
            let grid = SheetGrid { columns, tile_width: 275 };
            for count in 1..14usize {
                let heights: Vec<u32> = (0..count).map(|i| 50 + (i as u32 * 97) % 400).collect();
                let plan = LayoutPlan::new(grid, &heights, &config);

                let rows = count.div_ceil(columns as usize);
                assert_eq!(plan.rows(), rows);
                assert_eq!(plan.canvas_width, columns * (275 + 20) - 20);
                assert_eq!(
                    plan.canvas_height,
                    plan.row_heights.iter().sum::<u32>() + rows as u32 * 40
                );
            }
        }
    }

    #[test]
    fn plan_short_sheet_still_spans_all_columns() {
        // Two images on a three-column grid keep the full three-column width.
        let grid = SheetGrid::for_viewport(1000, &config());
        let plan = LayoutPlan::new(grid, &[234, 100], &config());
        assert_eq!(plan.canvas_width, 979);
        assert_eq!(plan.rows(), 1);
    }

    #[test]
    fn plan_single_image() {
        let grid = SheetGrid::for_viewport(200, &config());
        let plan = LayoutPlan::new(grid, &[90], &config());
        assert_eq!(plan.canvas_width, 180);
        assert_eq!(plan.canvas_height, 130);
    }

    // =========================================================================
    // Placement tests
    // =========================================================================

    #[test]
    fn origins_are_row_major() {
        let grid = SheetGrid::for_viewport(1000, &config());
        let plan = LayoutPlan::new(grid, &[234, 234, 234, 234], &config());

        let origins: Vec<(u32, u32)> = (0..4).filter_map(|i| plan.tile_origin(i)).collect();
        assert_eq!(origins, vec![(0, 0), (333, 0), (666, 0), (0, 274)]);
        assert_eq!(plan.tile_origin(4), None);

        let wrapped = plan.place(3, 234, 10).unwrap();
        assert_eq!((wrapped.index, wrapped.row, wrapped.column), (3, 1, 0));
    }

    #[test]
    fn row_tops_accumulate_uneven_heights() {
        let grid = SheetGrid { columns: 1, tile_width: 300 };
        let plan = LayoutPlan::new(grid, &[100, 50, 10], &config());
        assert_eq!(plan.tile_origin(1), Some((0, 140)));
        assert_eq!(plan.tile_origin(2), Some((0, 230)));
    }

    #[test]
    fn tiles_in_a_row_never_overlap() {
        for viewport in [270, 540, 999, 1000, 1919, 2560, 3840] {
            let grid = SheetGrid::for_viewport(viewport, &config());
            let count = grid.columns as usize * 2;
            let plan = LayoutPlan::new(grid, &vec![100; count], &config());

            for index in 1..grid.columns as usize {
                let (left, _) = plan.tile_origin(index - 1).unwrap();
                let (right, _) = plan.tile_origin(index).unwrap();
                assert_eq!(right - (left + grid.tile_width), 20, "viewport {viewport}");
            }
            let (last, _) = plan.tile_origin(grid.columns as usize - 1).unwrap();
            assert_eq!(last + grid.tile_width, plan.canvas_width);
        }
    }

    #[test]
    fn caption_centred_below_tile() {
        let grid = SheetGrid::for_viewport(1000, &config());
        let plan = LayoutPlan::new(grid, &[234, 200], &config());

        let placement = plan.place(1, 200, 101).unwrap();
        assert_eq!((placement.x, placement.y), (333, 0));
        assert_eq!((placement.row, placement.column), (0, 1));
        assert_eq!(placement.caption, Some((333 + 106, 205)));
    }

    #[test]
    fn caption_exactly_tile_width_fits() {
        let grid = SheetGrid { columns: 1, tile_width: 300 };
        let plan = LayoutPlan::new(grid, &[10], &config());
        assert_eq!(plan.place(0, 10, 300).unwrap().caption, Some((0, 15)));
    }

    #[test]
    fn caption_wider_than_tile_is_dropped() {
        let grid = SheetGrid { columns: 1, tile_width: 300 };
        let plan = LayoutPlan::new(grid, &[10], &config());
        let placement = plan.place(0, 10, 301).unwrap();
        assert_eq!(placement.caption, None);
    }

    #[test]
    fn place_past_end_is_none() {
        let grid = SheetGrid { columns: 3, tile_width: 300 };
        let plan = LayoutPlan::new(grid, &[10], &config());
        assert!(plan.place(1, 10, 10).is_none());
    }
}
