//! Bitmask to atlas-offset lookup table and the resolver built on it

use crate::bitmask::{neighbor_mask, reduce_fringe, reduce_interior};
use forge_core::{TileGrid, TILE_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Pixel coordinate of a 16x16 sub-tile within a prepared autotile sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtlasOffset {
    pub x: u32,
    pub y: u32,
}

impl AtlasOffset {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Explicit mapping from reduced neighbor masks to atlas offsets.
///
/// Two sections: `interior` entries cover occupied cells (the 47 blob
/// variants), `fringe` entries cover the empty border cells drawn one cell
/// beyond the logical occupancy. The table is plain data and can be loaded
/// from JSON when a sheet uses a different layout than the default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutotileTable {
    interior: HashMap<u8, AtlasOffset>,
    fringe: HashMap<u8, AtlasOffset>,
}

/// Columns of 16x16 sub-tiles in the default sheet layout
const SHEET_COLUMNS: u32 = 8;

fn ordinal_offset(ordinal: u32) -> AtlasOffset {
    AtlasOffset::new(
        (ordinal % SHEET_COLUMNS) * TILE_SIZE as u32,
        (ordinal / SHEET_COLUMNS) * TILE_SIZE as u32,
    )
}

impl Default for AutotileTable {
    /// The standard layout: the 47 interior variants first, ordered by
    /// ascending reduced mask, then the 46 non-empty fringe variants, laid
    /// out left-to-right top-to-bottom in an 8-column sheet.
    fn default() -> Self {
        let interior_masks: BTreeSet<u8> = (0u16..=255).map(|m| reduce_interior(m as u8)).collect();
        let fringe_masks: BTreeSet<u8> = (0u16..=255)
            .map(|m| reduce_fringe(m as u8))
            .filter(|&m| m != 0)
            .collect();

        let interior: HashMap<u8, AtlasOffset> = interior_masks
            .iter()
            .enumerate()
            .map(|(i, &mask)| (mask, ordinal_offset(i as u32)))
            .collect();
        let base = interior.len() as u32;
        let fringe: HashMap<u8, AtlasOffset> = fringe_masks
            .iter()
            .enumerate()
            .map(|(i, &mask)| (mask, ordinal_offset(base + i as u32)))
            .collect();

        Self { interior, fringe }
    }
}

impl AutotileTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from its JSON form (external sheet-layout configuration)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Offset drawn for a single occupied cell with no occupied neighbors
    pub fn isolated(&self) -> Option<AtlasOffset> {
        self.interior.get(&0).copied()
    }

    /// Offset drawn for an occupied cell with all 8 neighbors occupied
    pub fn full_interior(&self) -> Option<AtlasOffset> {
        self.interior.get(&0xFF).copied()
    }

    /// Resolve the atlas offset for cell (x, y), or `None` when nothing
    /// should render there.
    ///
    /// Occupied cells map through the interior section, empty cells with at
    /// least one occupied neighbor through the fringe section. Purely a
    /// function of the 3x3 neighborhood occupancy.
    pub fn resolve(&self, x: i32, y: i32, grid: &TileGrid) -> Option<AtlasOffset> {
        let mask = neighbor_mask(x, y, grid);
        if grid.contains(x, y) {
            self.interior.get(&reduce_interior(mask)).copied()
        } else if mask != 0 {
            self.fringe.get(&reduce_fringe(mask)).copied()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmask;
    use std::collections::HashSet;

    #[test]
    fn test_table_covers_all_reduced_masks() {
        let table = AutotileTable::default();
        assert_eq!(table.interior.len(), 47);
        assert_eq!(table.fringe.len(), 46);
        for m in 0u16..=255 {
            assert!(table.interior.contains_key(&reduce_interior(m as u8)));
            let f = reduce_fringe(m as u8);
            if f != 0 {
                assert!(table.fringe.contains_key(&f));
            }
        }
    }

    #[test]
    fn test_table_offsets_are_distinct() {
        let table = AutotileTable::default();
        let offsets: HashSet<AtlasOffset> = table
            .interior
            .values()
            .chain(table.fringe.values())
            .copied()
            .collect();
        assert_eq!(offsets.len(), 93);
    }

    #[test]
    fn test_isolated_and_full_interior() {
        let table = AutotileTable::default();
        let mut grid = TileGrid::new();
        grid.add(5, 5);
        assert_eq!(table.resolve(5, 5, &grid), table.isolated());
        assert_eq!(table.isolated(), Some(AtlasOffset::new(0, 0)));

        for x in 4..=6 {
            for y in 4..=6 {
                grid.add(x, y);
            }
        }
        assert_eq!(table.resolve(5, 5, &grid), table.full_interior());
        assert_ne!(table.full_interior(), table.isolated());
    }

    #[test]
    fn test_empty_neighborhood_resolves_empty() {
        let table = AutotileTable::default();
        let mut grid = TileGrid::new();
        grid.add(5, 5);
        assert_eq!(table.resolve(0, 0, &grid), None);
        assert_eq!(table.resolve(7, 5, &grid), None);
    }

    #[test]
    fn test_fringe_renders_next_to_occupied() {
        let table = AutotileTable::default();
        let mut grid = TileGrid::new();
        grid.add(5, 5);
        // every cell of the 3x3 ring around a lone cell gets a fringe tile
        for dx in -1..=1 {
            for dy in -1..=1 {
                if (dx, dy) == (0, 0) {
                    continue;
                }
                let got = table.resolve(5 + dx, 5 + dy, &grid);
                assert!(got.is_some(), "no fringe at offset ({dx}, {dy})");
                assert_ne!(got, table.isolated());
            }
        }
    }

    #[test]
    fn test_resolution_is_translation_invariant() {
        let table = AutotileTable::default();
        let mut grid = TileGrid::new();
        for (x, y) in [(2, 3), (3, 3), (2, 4), (4, 4)] {
            grid.add(x, y);
        }

        let before: Vec<_> = (0..8)
            .flat_map(|x| (0..8).map(move |y| (x, y)))
            .map(|(x, y)| table.resolve(x, y, &grid))
            .collect();

        grid.translate(11, -6);
        let after: Vec<_> = (0..8)
            .flat_map(|x| (0..8).map(move |y| (x, y)))
            .map(|(x, y)| table.resolve(x + 11, y - 6, &grid))
            .collect();

        assert_eq!(before, after);
    }

    #[test]
    fn test_edge_variants_differ() {
        let table = AutotileTable::default();
        let mut grid = TileGrid::new();
        // horizontal strip: left cap, middle, right cap all differ
        grid.add(4, 5);
        grid.add(5, 5);
        grid.add(6, 5);
        let left = table.resolve(4, 5, &grid);
        let mid = table.resolve(5, 5, &grid);
        let right = table.resolve(6, 5, &grid);
        assert!(left.is_some() && mid.is_some() && right.is_some());
        assert_ne!(left, mid);
        assert_ne!(mid, right);
        assert_ne!(left, right);
    }

    #[test]
    fn test_json_round_trip() {
        let table = AutotileTable::default();
        let json = serde_json::to_string(&table).unwrap();
        let restored = AutotileTable::from_json(&json).unwrap();
        assert_eq!(restored.interior, table.interior);
        assert_eq!(restored.fringe, table.fringe);
    }

    #[test]
    fn test_corner_mask_uses_bitmask_flags() {
        // occupied cell with N+E edges and the NE corner filled picks a
        // different variant than without the corner
        let table = AutotileTable::default();
        let with_corner = table
            .interior
            .get(&(bitmask::N | bitmask::NE | bitmask::E))
            .copied();
        let without_corner = table.interior.get(&(bitmask::N | bitmask::E)).copied();
        assert!(with_corner.is_some());
        assert_ne!(with_corner, without_corner);
    }
}
