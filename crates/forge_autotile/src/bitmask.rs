//! Neighbor occupancy bitmasks
//!
//! Each of the 8 cells surrounding a target cell contributes one bit. The
//! raw 256-case mask is reduced before table lookup: corner neighbors only
//! change the drawn tile in specific edge configurations, which collapses
//! the domain to the classic 47 "blob" variants.

use forge_core::TileGrid;

/// Neighbor direction flags
pub const N: u8 = 0b0000_0001;
pub const NE: u8 = 0b0000_0010;
pub const E: u8 = 0b0000_0100;
pub const SE: u8 = 0b0000_1000;
pub const S: u8 = 0b0001_0000;
pub const SW: u8 = 0b0010_0000;
pub const W: u8 = 0b0100_0000;
pub const NW: u8 = 0b1000_0000;

/// Each corner flag paired with its two adjacent edge flags
const CORNERS: [(u8, u8); 4] = [(NE, N | E), (SE, S | E), (SW, S | W), (NW, N | W)];

/// Flag-to-offset pairs, clockwise from north
const OFFSETS: [(u8, i32, i32); 8] = [
    (N, 0, -1),
    (NE, 1, -1),
    (E, 1, 0),
    (SE, 1, 1),
    (S, 0, 1),
    (SW, -1, 1),
    (W, -1, 0),
    (NW, -1, -1),
];

/// Build the occupancy mask for the 8 cells surrounding (x, y).
///
/// Cells outside the grid's bounds are unoccupied neighbors, so shapes fade
/// correctly at their own perimeter.
pub fn neighbor_mask(x: i32, y: i32, grid: &TileGrid) -> u8 {
    let mut mask = 0u8;
    for (flag, dx, dy) in OFFSETS {
        if grid.contains(x + dx, y + dy) {
            mask |= flag;
        }
    }
    mask
}

/// Reduce a mask for an occupied cell: a corner bit is only meaningful when
/// both of its adjacent edges are occupied (otherwise the edge variant
/// already covers it). Yields 47 distinct values.
pub fn reduce_interior(mask: u8) -> u8 {
    let mut reduced = mask;
    for (corner, edges) in CORNERS {
        if mask & edges != edges {
            reduced &= !corner;
        }
    }
    reduced
}

/// Reduce a mask for an empty fringe cell: a corner bit is only meaningful
/// when neither adjacent edge is occupied (otherwise the edge blend already
/// covers that corner). Also yields 47 distinct values, zero included.
pub fn reduce_fringe(mask: u8) -> u8 {
    let mut reduced = mask;
    for (corner, edges) in CORNERS {
        if mask & edges != 0 {
            reduced &= !corner;
        }
    }
    reduced
}
