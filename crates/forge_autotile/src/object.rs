//! A placed autotile object on the world grid

use crate::table::{AtlasOffset, AutotileTable};
use forge_core::{Rect, TileGrid, TILE_SIZE};
use std::sync::Arc;

/// A contiguous shape of identical cells placed in the world.
///
/// Wraps a sprite reference (by catalog id) and an owned occupancy grid.
/// The rendered footprint extends one cell beyond the logical occupancy in
/// every direction because of fringe blend tiles, which is reflected in
/// `bounds` and `is_hit`.
#[derive(Debug, Clone)]
pub struct Autotile {
    /// Catalog id of the prepared autotile sprite sheet
    pub sprite_id: u32,
    pub grid: TileGrid,
    table: Arc<AutotileTable>,
}

impl Autotile {
    /// Create an autotile with one occupied cell at (start_x, start_y).
    pub fn new(sprite_id: u32, start_x: i32, start_y: i32, table: Arc<AutotileTable>) -> Self {
        let mut grid = TileGrid::new();
        grid.add(start_x, start_y);
        Self {
            sprite_id,
            grid,
            table,
        }
    }

    /// Mark cell (i, j) as part of this shape.
    pub fn add_cell(&mut self, i: i32, j: i32) {
        self.grid.add(i, j);
    }

    /// Move the whole shape so its grid origin lands on the cell containing
    /// the given pixel position.
    ///
    /// Floor division keeps cell conversion consistent for negative pixel
    /// coordinates, so dragging across the origin cannot drift by a cell.
    pub fn move_to(&mut self, pixel_x: i32, pixel_y: i32) {
        let origin = match self.grid.bounds() {
            Some(bounds) => bounds,
            None => return,
        };
        let dx = pixel_x.div_euclid(TILE_SIZE) - origin.x;
        let dy = pixel_y.div_euclid(TILE_SIZE) - origin.y;
        self.grid.translate(dx, dy);
    }

    /// Pixel-space bounds: the grid bounds widened by one extra cell to
    /// accommodate fringe tiles.
    pub fn bounds(&self) -> Rect {
        let r = match self.grid.bounds() {
            Some(r) => r,
            None => return Rect::new(0, 0, 0, 0),
        };
        Rect::new(
            r.x * TILE_SIZE,
            r.y * TILE_SIZE,
            (r.w + 1) * TILE_SIZE,
            (r.h + 1) * TILE_SIZE,
        )
    }

    /// Hit-test a pixel position against the rendered footprint.
    ///
    /// Checks the 3x3 neighborhood around the target cell because fringe
    /// tiles render one cell beyond the logical occupancy.
    pub fn is_hit(&self, pixel_x: i32, pixel_y: i32) -> bool {
        let cx = pixel_x.div_euclid(TILE_SIZE);
        let cy = pixel_y.div_euclid(TILE_SIZE);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if self.grid.contains(cx + dx, cy + dy) {
                    return true;
                }
            }
        }
        false
    }

    /// Enumerate the tiles to draw inside a pixel-space clip rectangle.
    ///
    /// Yields `(pixel_x, pixel_y, offset)` for every cell whose pixel extent
    /// intersects the clip and resolves to a non-empty variant. This is the
    /// sole interface the render layer needs.
    pub fn visible_tiles(&self, clip: &Rect) -> Vec<(i32, i32, AtlasOffset)> {
        let mut tiles = Vec::new();
        if clip.w <= 0 || clip.h <= 0 {
            return tiles;
        }
        let min_i = clip.x.div_euclid(TILE_SIZE);
        let min_j = clip.y.div_euclid(TILE_SIZE);
        let max_i = (clip.max_x() - 1).div_euclid(TILE_SIZE);
        let max_j = (clip.max_y() - 1).div_euclid(TILE_SIZE);

        for i in min_i..=max_i {
            for j in min_j..=max_j {
                if let Some(offset) = self.table.resolve(i, j, &self.grid) {
                    tiles.push((i * TILE_SIZE, j * TILE_SIZE, offset));
                }
            }
        }
        tiles
    }
}
