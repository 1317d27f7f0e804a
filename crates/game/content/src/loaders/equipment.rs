//! Equipment catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use crawler_core::{EquipmentCatalog, EquipmentItem};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Equipment catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentFile {
    pub items: Vec<EquipmentItem>,
}

/// Loader for the equipment catalog from RON files.
pub struct EquipmentLoader;

impl EquipmentLoader {
    pub fn load(path: &Path) -> LoadResult<EquipmentCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses a catalog, rejecting duplicate ids.
    pub fn parse(content: &str) -> LoadResult<EquipmentCatalog> {
        let file: EquipmentFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for item in &file.items {
            if !seen.insert(item.id) {
                anyhow::bail!("Duplicate equipment id {} ({})", item.id, item.name);
            }
        }
        Ok(EquipmentCatalog::new(file.items))
    }
}
