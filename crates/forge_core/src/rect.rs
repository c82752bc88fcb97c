//! Integer axis-aligned rectangle

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with integer position and size.
///
/// Used in cell units for grid bounds and in pixel units for object bounds,
/// clip rectangles, and sprite selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge
    pub fn max_x(&self) -> i32 {
        self.x + self.w
    }

    /// Exclusive bottom edge
    pub fn max_y(&self) -> i32 {
        self.y + self.h
    }

    /// Check if a point lies inside this rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.max_x() && y < self.max_y()
    }

    /// Check if another rectangle lies entirely inside this one
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.w >= 0
            && other.h >= 0
            && other.x >= self.x
            && other.y >= self.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Check if two rectangles overlap
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }

    /// Shift this rectangle by (dx, dy)
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Grow this rectangle (in place) so it covers the given point
    pub fn expand_to(&mut self, x: i32, y: i32) {
        let max_x = self.max_x().max(x + 1);
        let max_y = self.max_y().max(y + 1);
        self.x = self.x.min(x);
        self.y = self.y.min(y);
        self.w = max_x - self.x;
        self.h = max_y - self.y;
    }
}
