//! Tileset resources and their sprite selections

use crate::ArmoryError;
use forge_core::Rect;
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A named rectangular selection within a tileset image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub name: String,
    /// Selection bounds in pixels, relative to the parent image
    pub bounds: Rect,
    /// Whether this selection is a prepared autotile sheet
    #[serde(default)]
    pub autotile: bool,
}

impl Sprite {
    pub fn new(name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            name: name.into(),
            bounds,
            autotile: false,
        }
    }

    pub fn autotile(name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            name: name.into(),
            bounds,
            autotile: true,
        }
    }
}

/// Serialized form of a resource: everything except the backing image,
/// which is stored as a separate png next to the payload.
#[derive(Serialize, Deserialize)]
struct ResourcePayload {
    name: String,
    sprites: Vec<Sprite>,
}

/// An imported tileset: a stable integer id, the decoded image, and the
/// sprite selections carved from it.
#[derive(Debug, Clone)]
pub struct Resource {
    pub id: u32,
    pub name: String,
    image: RgbaImage,
    sprites: Vec<Sprite>,
}

impl Resource {
    pub(crate) fn new(id: u32, name: String, image: RgbaImage) -> Self {
        Self {
            id,
            name,
            image,
            sprites: Vec::new(),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Full extent of the backing image, in pixels
    pub fn extent(&self) -> Rect {
        Rect::new(0, 0, self.image.width() as i32, self.image.height() as i32)
    }

    /// Record a sprite selection. Bounds must lie within the image extent.
    pub fn add_sprite(&mut self, sprite: Sprite) -> Result<(), ArmoryError> {
        if !self.extent().contains_rect(&sprite.bounds) {
            return Err(ArmoryError::SpriteOutOfBounds {
                id: self.id,
                bounds: sprite.bounds,
            });
        }
        self.sprites.push(sprite);
        Ok(())
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn sprite(&self, index: usize) -> Option<&Sprite> {
        self.sprites.get(index)
    }

    pub fn sprite_mut(&mut self, index: usize) -> Option<&mut Sprite> {
        self.sprites.get_mut(index)
    }

    fn payload_path(dir: &Path, id: u32) -> std::path::PathBuf {
        dir.join(format!("{id}.json"))
    }

    fn image_path(dir: &Path, id: u32) -> std::path::PathBuf {
        dir.join(format!("{id}.png"))
    }

    /// Persist this resource's payload and backing image into `dir`.
    pub(crate) fn save(&self, dir: &Path) -> Result<(), ArmoryError> {
        let payload = ResourcePayload {
            name: self.name.clone(),
            sprites: self.sprites.clone(),
        };
        let json = serde_json::to_string_pretty(&payload)
            .map_err(|e| ArmoryError::Parse(e.to_string()))?;
        fs::write(Self::payload_path(dir, self.id), json)
            .map_err(|e| ArmoryError::Io(e.to_string()))?;
        self.image
            .save(Self::image_path(dir, self.id))
            .map_err(|e| ArmoryError::Image(e.to_string()))?;
        Ok(())
    }

    /// Hydrate a resource from its payload and backing image in `dir`.
    ///
    /// A listed id with a missing or unparsable payload, an undecodable
    /// image, or sprite bounds outside the image is malformed persisted
    /// state and fails the load.
    pub(crate) fn load(dir: &Path, id: u32) -> Result<Self, ArmoryError> {
        let json = fs::read_to_string(Self::payload_path(dir, id))
            .map_err(|e| ArmoryError::Io(e.to_string()))?;
        let payload: ResourcePayload =
            serde_json::from_str(&json).map_err(|e| ArmoryError::Parse(e.to_string()))?;
        let image = image::open(Self::image_path(dir, id))
            .map_err(|e| ArmoryError::Image(e.to_string()))?
            .to_rgba8();

        let mut resource = Self::new(id, payload.name, image);
        for sprite in payload.sprites {
            resource.add_sprite(sprite)?;
        }
        Ok(resource)
    }
}
