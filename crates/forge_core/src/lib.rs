//! Core data structures for the forge map editor
//!
//! This crate provides the fundamental types the editor's content engine is
//! built on:
//! - `Rect` - Integer axis-aligned rectangle, used in both cell and pixel units
//! - `TileGrid` - Sparse set of occupied cells with a tracked bounding rectangle

mod grid;
mod rect;

pub use grid::TileGrid;
pub use rect::Rect;

/// Side length of one world cell, in pixels.
pub const TILE_SIZE: i32 = 16;
