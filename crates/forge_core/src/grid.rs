//! Sparse occupancy grid with a tracked bounding rectangle

use crate::Rect;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A sparse set of occupied integer cells with an incrementally maintained
/// bounding rectangle.
///
/// The bounds are always the tight rectangle around all occupied cells, in
/// cell units. Cells are only ever added or translated as a whole; there is
/// no removal, so the bounds never shrink.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TileGrid {
    cells: HashSet<(i32, i32)>,
    bounds: Option<Rect>,
}

impl TileGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the cell (x, y) occupied. Idempotent.
    pub fn add(&mut self, x: i32, y: i32) {
        self.cells.insert((x, y));
        match &mut self.bounds {
            Some(bounds) => bounds.expand_to(x, y),
            None => self.bounds = Some(Rect::new(x, y, 1, 1)),
        }
    }

    /// Check whether the cell (x, y) is occupied.
    ///
    /// Rejects coordinates outside the bounds before probing the set.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        match &self.bounds {
            Some(bounds) if bounds.contains(x, y) => self.cells.contains(&(x, y)),
            _ => false,
        }
    }

    /// Shift every occupied cell and the bounds by (dx, dy).
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.cells = std::mem::take(&mut self.cells)
            .into_iter()
            .map(|(x, y)| (x + dx, y + dy))
            .collect();
        if let Some(bounds) = &mut self.bounds {
            bounds.translate(dx, dy);
        }
    }

    /// The tight bounding rectangle of all occupied cells, in cell units.
    /// `None` while the grid is empty.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all occupied cells, in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Brute-force tight bounds for comparison against the tracked bounds
    fn true_bounds(grid: &TileGrid) -> Option<Rect> {
        let min_x = grid.cells().map(|(x, _)| x).min()?;
        let min_y = grid.cells().map(|(_, y)| y).min()?;
        let max_x = grid.cells().map(|(x, _)| x).max()?;
        let max_y = grid.cells().map(|(_, y)| y).max()?;
        Some(Rect::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    }

    #[test]
    fn test_empty_grid() {
        let grid = TileGrid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.bounds(), None);
        assert!(!grid.contains(0, 0));
    }

    #[test]
    fn test_first_add_initializes_bounds() {
        let mut grid = TileGrid::new();
        grid.add(2, 3);
        assert_eq!(grid.bounds(), Some(Rect::new(2, 3, 1, 1)));
        assert!(grid.contains(2, 3));
        assert!(!grid.contains(3, 3));
    }

    #[test]
    fn test_bounds_stay_tight() {
        let mut grid = TileGrid::new();
        for (x, y) in [(5, 5), (7, 2), (-3, 4), (0, -6), (5, 5), (12, 0)] {
            grid.add(x, y);
            assert_eq!(grid.bounds(), true_bounds(&grid));
        }
        assert_eq!(grid.len(), 5);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut grid = TileGrid::new();
        grid.add(1, 1);
        grid.add(1, 1);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.bounds(), Some(Rect::new(1, 1, 1, 1)));
    }

    #[test]
    fn test_contains_rejects_outside_bounds() {
        let mut grid = TileGrid::new();
        grid.add(2, 2);
        grid.add(4, 4);
        // inside bounds but unoccupied
        assert!(!grid.contains(3, 3));
        // outside bounds entirely
        assert!(!grid.contains(5, 4));
        assert!(!grid.contains(-1, 2));
    }

    #[test]
    fn test_translate_preserves_shape() {
        let mut grid = TileGrid::new();
        grid.add(0, 0);
        grid.add(1, 0);
        grid.add(0, 1);
        grid.translate(5, -3);

        assert!(grid.contains(5, -3));
        assert!(grid.contains(6, -3));
        assert!(grid.contains(5, -2));
        assert!(!grid.contains(0, 0));
        assert_eq!(grid.bounds(), Some(Rect::new(5, -3, 2, 2)));
    }

    #[test]
    fn test_translate_round_trip() {
        let mut grid = TileGrid::new();
        for (x, y) in [(2, 3), (3, 3), (2, 4), (-1, 7)] {
            grid.add(x, y);
        }
        let cells: Vec<_> = grid.cells().collect();
        let bounds = grid.bounds();

        grid.translate(13, -8);
        grid.translate(-13, 8);

        for (x, y) in &cells {
            assert!(grid.contains(*x, *y));
        }
        assert_eq!(grid.len(), cells.len());
        assert_eq!(grid.bounds(), bounds);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut grid = TileGrid::new();
        grid.add(2, 3);
        grid.add(3, 3);

        let json = serde_json::to_string(&grid).unwrap();
        let restored: TileGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.len(), 2);
        assert!(restored.contains(2, 3));
        assert!(restored.contains(3, 3));
        assert_eq!(restored.bounds(), grid.bounds());
    }
}
