//! Tileset resource registry for the forge map editor
//!
//! The armory owns the catalog of imported tileset images and the sprite
//! selections carved from them:
//! - `Sprite` - a named rectangular selection within a tileset image
//! - `Resource` - an imported tileset: stable integer id, decoded image,
//!   sprite selections
//! - `Armory` - the catalog itself, with id assignment and JSON persistence
//!   under a per-application data directory
//!
//! Ids are assigned from a monotonic counter recomputed from loaded data at
//! startup, so re-importing after a restart never collides with persisted
//! ids.

mod registry;
mod resource;

pub use registry::Armory;
pub use resource::{Resource, Sprite};

use forge_core::Rect;
use thiserror::Error;

/// Errors from armory persistence and sprite selection
#[derive(Debug, Error)]
pub enum ArmoryError {
    #[error("io error: {0}")]
    Io(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("image error: {0}")]
    Image(String),
    #[error("sprite bounds {bounds:?} outside the image of resource {id}")]
    SpriteOutOfBounds { id: u32, bounds: Rect },
    #[error("could not determine application data directory")]
    NoDataDir,
}
