//! Content loaders for reading game data from files.

pub mod bestiary;
pub mod config;
pub mod equipment;
pub mod factory;

pub use bestiary::BestiaryLoader;
pub use config::ConfigLoader;
pub use equipment::{EquipmentFile, EquipmentLoader};
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
