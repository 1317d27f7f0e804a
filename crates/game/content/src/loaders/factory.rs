//! Content factory for loading every data file from one directory.

use std::path::{Path, PathBuf};

use crawler_core::{Bestiary, Catalogs, EquipmentCatalog, GameConfig};

use crate::loaders::{BestiaryLoader, ConfigLoader, EquipmentLoader, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── equipment.ron
/// └── bestiary.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the files shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::bundled_data_dir())
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the equipment catalog from `equipment.ron`.
    pub fn load_equipment(&self) -> LoadResult<EquipmentCatalog> {
        EquipmentLoader::load(&self.data_dir.join("equipment.ron"))
    }

    /// Load enemy templates from `bestiary.ron`.
    pub fn load_bestiary(&self) -> LoadResult<Bestiary> {
        BestiaryLoader::load(&self.data_dir.join("bestiary.ron"))
    }

    /// Load both catalogs, ready to share between floors.
    pub fn load_catalogs(&self) -> LoadResult<Catalogs> {
        Ok(Catalogs::new(self.load_equipment()?, self.load_bestiary()?))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
