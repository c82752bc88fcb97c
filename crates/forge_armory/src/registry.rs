//! The resource catalog and its persistence

use crate::{ArmoryError, Resource};
use directories::ProjectDirs;
use image::RgbaImage;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

const LISTING_FILE: &str = "tilesets.json";

/// The catalog of imported tileset resources.
///
/// Assigns monotonically increasing integer ids and persists the catalog
/// under a per-application data directory: one listing file with the live
/// ids, plus one payload and one backing image per id.
///
/// Single logical owner: mutation goes through `&mut self`, readers get
/// shared accessors only.
#[derive(Debug)]
pub struct Armory {
    data_dir: PathBuf,
    resources: Vec<Resource>,
    id_counter: u32,
}

impl Armory {
    /// Open the armory in the platform data directory and load any
    /// persisted catalog.
    pub fn open() -> Result<Self, ArmoryError> {
        let dirs = ProjectDirs::from("com", "forge", "forge").ok_or(ArmoryError::NoDataDir)?;
        let mut armory = Self::with_data_dir(dirs.data_dir().join("armory"));
        armory.load()?;
        Ok(armory)
    }

    /// Open an empty armory backed by an explicit directory. Nothing is
    /// read until `load` is called.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            resources: Vec::new(),
            id_counter: 0,
        }
    }

    /// Import a decoded tileset image under the next free id.
    pub fn import(&mut self, name: impl Into<String>, image: RgbaImage) -> &mut Resource {
        let id = self.id_counter;
        self.id_counter += 1;
        self.resources.push(Resource::new(id, name.into(), image));
        let last = self.resources.len() - 1;
        &mut self.resources[last]
    }

    /// Look up a resource by id. A miss is a normal absent result.
    pub fn resource(&self, id: u32) -> Option<&Resource> {
        self.resources.iter().find(|rez| rez.id == id)
    }

    pub fn resource_mut(&mut self, id: u32) -> Option<&mut Resource> {
        self.resources.iter_mut().find(|rez| rez.id == id)
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// The id the next import will receive.
    pub fn next_id(&self) -> u32 {
        self.id_counter
    }

    /// Read the listing file and hydrate every referenced resource.
    ///
    /// An absent listing is a first run, not an error. The id counter is
    /// advanced past every loaded id so later imports never collide.
    pub fn load(&mut self) -> Result<(), ArmoryError> {
        let start = Instant::now();
        let listing = self.data_dir.join(LISTING_FILE);
        if !listing.exists() {
            return Ok(());
        }

        let json = fs::read_to_string(&listing).map_err(|e| ArmoryError::Io(e.to_string()))?;
        let ids: Vec<u32> =
            serde_json::from_str(&json).map_err(|e| ArmoryError::Parse(e.to_string()))?;

        for id in ids {
            self.id_counter = self.id_counter.max(id + 1);
            let resource = Resource::load(&self.data_dir, id)?;
            self.resources.push(resource);
        }

        log::info!(
            "armory loaded {} tilesets in {:?}",
            self.resources.len(),
            start.elapsed()
        );
        Ok(())
    }

    /// Persist every resource, then the listing.
    ///
    /// Payloads and images are written before the listing is updated, so a
    /// crash mid-save leaves the previous listing pointing at complete
    /// data.
    pub fn save(&self) -> Result<(), ArmoryError> {
        let start = Instant::now();
        fs::create_dir_all(&self.data_dir).map_err(|e| ArmoryError::Io(e.to_string()))?;

        let mut ids = Vec::with_capacity(self.resources.len());
        for resource in &self.resources {
            resource.save(&self.data_dir)?;
            ids.push(resource.id);
        }

        let json =
            serde_json::to_string_pretty(&ids).map_err(|e| ArmoryError::Parse(e.to_string()))?;
        fs::write(self.data_dir.join(LISTING_FILE), json)
            .map_err(|e| ArmoryError::Io(e.to_string()))?;

        log::info!("armory saved {} tilesets in {:?}", ids.len(), start.elapsed());
        Ok(())
    }
}
