//! Bestiary loader.

use std::path::Path;

use crawler_core::Bestiary;

use crate::loaders::{LoadResult, read_file};

/// Loader for regular enemy and boss templates from RON files.
pub struct BestiaryLoader;

impl BestiaryLoader {
    pub fn load(path: &Path) -> LoadResult<Bestiary> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses a bestiary. Template ids must be unique across regulars and
    /// bosses, and hit points positive.
    pub fn parse(content: &str) -> LoadResult<Bestiary> {
        let bestiary: Bestiary = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse bestiary RON: {}", e))?;

        let mut ids = Vec::new();
        for template in bestiary.regulars.iter().chain(bestiary.bosses.iter()) {
            if ids.contains(&template.id) {
                anyhow::bail!("Duplicate enemy template id {} ({})", template.id, template.name);
            }
            if template.hit_points <= 0 {
                anyhow::bail!("Enemy template {} has no hit points", template.name);
            }
            ids.push(template.id);
        }
        Ok(bestiary)
    }
}
