//! Read-only world data: board geometry, equipment and enemy tables,
//! consumable effects, and the seeded random stream.
//!
//! Nothing here changes during play. The engine holds the tables behind
//! `Arc` so floors and the runtime can share them.
mod bestiary;
mod board;
mod catalog;
mod consumable;
mod rng;

pub use bestiary::{Bestiary, EnemyTemplate};
pub use board::BoardDimensions;
pub use catalog::{EquipmentCatalog, EquipmentItem};
pub use consumable::{ConsumableEffect, ConsumableKind};
pub use rng::{PcgRng, RngSource};

use std::sync::Arc;

/// Shared handles to the static tables a floor reads from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalogs {
    pub equipment: Arc<EquipmentCatalog>,
    pub bestiary: Arc<Bestiary>,
}

impl Catalogs {
    pub fn new(equipment: EquipmentCatalog, bestiary: Bestiary) -> Self {
        Self {
            equipment: Arc::new(equipment),
            bestiary: Arc::new(bestiary),
        }
    }

    /// The shipped equipment table and bestiary.
    pub fn reference() -> Self {
        Self::new(EquipmentCatalog::reference(), Bestiary::reference())
    }
}
