use crate::env::{EquipmentCatalog, RngSource};
use crate::state::EquipmentId;

/// Equipment not yet dropped in this campaign.
///
/// Starts with every catalog id except the default weapon. Drawn ids never
/// come back, so equipment does not repeat across floors.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentPool {
    remaining: Vec<EquipmentId>,
}

impl EquipmentPool {
    pub fn from_catalog(catalog: &EquipmentCatalog, default_weapon: EquipmentId) -> Self {
        Self {
            remaining: catalog.ids().filter(|id| *id != default_weapon).collect(),
        }
    }

    /// Removes and returns a random id, or `None` once exhausted.
    pub fn draw(&mut self, rng: &mut impl RngSource) -> Option<EquipmentId> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = rng.index(self.remaining.len());
        Some(self.remaining.remove(index))
    }

    pub fn remaining(&self) -> &[EquipmentId] {
        &self.remaining
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn default_weapon_never_enters_the_pool() {
        let catalog = EquipmentCatalog::reference();
        let pool = EquipmentPool::from_catalog(&catalog, EquipmentCatalog::DEFAULT_WEAPON);
        assert_eq!(pool.len(), catalog.len() - 1);
        assert!(!pool.remaining().contains(&EquipmentCatalog::DEFAULT_WEAPON));
    }

    #[test]
    fn draws_never_repeat() {
        let catalog = EquipmentCatalog::reference();
        let mut pool = EquipmentPool::from_catalog(&catalog, EquipmentCatalog::DEFAULT_WEAPON);
        let mut rng = PcgRng::seeded(5);
        let mut drawn = Vec::new();
        while let Some(id) = pool.draw(&mut rng) {
            assert!(!drawn.contains(&id));
            drawn.push(id);
        }
        assert_eq!(drawn.len(), catalog.len() - 1);
        assert_eq!(pool.draw(&mut rng), None);
    }
}
