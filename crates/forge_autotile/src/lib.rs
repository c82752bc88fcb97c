//! Neighbor-bitmask autotile resolution
//!
//! This crate picks the correct visual variant for each cell of a placed
//! autotile shape based on which of its 8 neighboring cells belong to the
//! same shape.
//!
//! - `bitmask` - neighbor occupancy flags and mask reductions
//! - `AutotileTable` - the enumerated bitmask -> atlas offset mapping
//! - `Autotile` - a placed world object wrapping a sprite reference and a grid
//!
//! Resolution is a pure function of the 3x3 neighborhood: occupied cells map
//! to one of the 47 "blob" interior variants, empty cells bordering the shape
//! map to a fringe variant drawn one cell beyond the logical occupancy.

pub mod bitmask;
mod object;
mod table;

pub use object::Autotile;
pub use table::{AtlasOffset, AutotileTable};
