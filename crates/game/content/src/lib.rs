//! Data-driven content for the crawler.
//!
//! Loaders read RON/TOML files into crawler-core types:
//! - Game configuration (TOML)
//! - Equipment catalog (RON)
//! - Bestiary of regular enemies and bosses (RON)
//!
//! Content is read once at startup and shared read-only with every floor.
//! The shipped files live in this crate's `data/` directory.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BestiaryLoader, ConfigLoader, ContentFactory, EquipmentFile, EquipmentLoader, LoadResult,
};

/// Directory holding the data files shipped with this crate.
pub fn bundled_data_dir() -> &'static std::path::Path {
    std::path::Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}
