//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use crawler_core::{GameConfig, GameError};

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a [`GameConfig`] from a TOML file.
    ///
    /// Missing keys fall back to the built-in defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate().map_err(|e| {
            anyhow::anyhow!("Invalid config ({}): {}", e.error_code(), e)
        })?;
        Ok(config)
    }
}
