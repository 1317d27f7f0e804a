//! Static equipment definitions indexed by catalog id.

use crate::state::{EquipmentId, SlotKind, StatBonus};

/// Definition of one piece of equipment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentItem {
    pub id: EquipmentId,
    pub name: String,
    pub slot: SlotKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonus: StatBonus,
}

impl EquipmentItem {
    pub fn new(id: u16, name: impl Into<String>, slot: SlotKind, bonus: StatBonus) -> Self {
        Self {
            id: EquipmentId(id),
            name: name.into(),
            slot,
            bonus,
        }
    }
}

/// Read-only table of equipment, looked up by [`EquipmentId`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EquipmentCatalog {
    items: Vec<EquipmentItem>,
}

impl EquipmentCatalog {
    /// The dagger every run starts with.
    pub const DEFAULT_WEAPON: EquipmentId = EquipmentId(7);

    pub fn new(mut items: Vec<EquipmentItem>) -> Self {
        items.sort_by_key(|item| item.id);
        Self { items }
    }

    /// The shipped table. Every item carries exactly one kind of bonus.
    pub fn reference() -> Self {
        Self::new(vec![
            EquipmentItem::new(0, "Leather Cap", SlotKind::Head, StatBonus::defense(1)),
            EquipmentItem::new(1, "Ruby Pendant", SlotKind::Pendant, StatBonus::hearts(2)),
            EquipmentItem::new(2, "Padded Vest", SlotKind::Body, StatBonus::defense(1)),
            EquipmentItem::new(3, "Chain Mail", SlotKind::Body, StatBonus::defense(2)),
            EquipmentItem::new(4, "Fang Charm", SlotKind::Pendant, StatBonus::attack(1)),
            EquipmentItem::new(5, "Iron Helm", SlotKind::Head, StatBonus::defense(1)),
            EquipmentItem::new(6, "Garnet Pendant", SlotKind::Pendant, StatBonus::hearts(1)),
            EquipmentItem::new(7, "Dagger", SlotKind::Weapon, StatBonus::attack(1)),
            EquipmentItem::new(8, "Short Sword", SlotKind::Weapon, StatBonus::attack(2)),
            EquipmentItem::new(9, "Battle Axe", SlotKind::Weapon, StatBonus::attack(3)),
        ])
    }

    pub fn get(&self, id: EquipmentId) -> Option<&EquipmentItem> {
        self.items
            .binary_search_by_key(&id, |item| item.id)
            .ok()
            .map(|index| &self.items[index])
    }

    pub fn ids(&self) -> impl Iterator<Item = EquipmentId> + '_ {
        self.items.iter().map(|item| item.id)
    }

    pub fn items(&self) -> &[EquipmentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
