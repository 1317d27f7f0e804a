//! Equipment slots for the controlled entity.
//!
//! Each slot kind holds at most one catalog id. An empty slot is `None`, and
//! callers must check for it before looking anything up in the catalog.

use std::fmt;

use strum::{Display, EnumIter, IntoEnumIterator};

/// Index into the equipment catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct EquipmentId(pub u16);

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "equipment:{}", self.0)
    }
}

/// Body slot an equipment item occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SlotKind {
    Weapon,
    Head,
    Body,
    Pendant,
}

/// Catalog ids currently worn in each slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EquipmentSlots {
    pub weapon: Option<EquipmentId>,
    pub head: Option<EquipmentId>,
    pub body: Option<EquipmentId>,
    pub pendant: Option<EquipmentId>,
}

impl EquipmentSlots {
    /// Creates slots holding only a weapon.
    pub fn with_weapon(weapon: EquipmentId) -> Self {
        Self {
            weapon: Some(weapon),
            ..Self::default()
        }
    }

    pub fn get(&self, kind: SlotKind) -> Option<EquipmentId> {
        match kind {
            SlotKind::Weapon => self.weapon,
            SlotKind::Head => self.head,
            SlotKind::Body => self.body,
            SlotKind::Pendant => self.pendant,
        }
    }

    /// Puts `id` into the slot, returning whatever was there before.
    pub fn replace(&mut self, kind: SlotKind, id: EquipmentId) -> Option<EquipmentId> {
        self.slot_mut(kind).replace(id)
    }

    /// Iterates equipped ids in display order (weapon, head, body, pendant).
    pub fn equipped(&self) -> impl Iterator<Item = (SlotKind, EquipmentId)> + '_ {
        SlotKind::iter().filter_map(|kind| self.get(kind).map(|id| (kind, id)))
    }

    fn slot_mut(&mut self, kind: SlotKind) -> &mut Option<EquipmentId> {
        match kind {
            SlotKind::Weapon => &mut self.weapon,
            SlotKind::Head => &mut self.head,
            SlotKind::Body => &mut self.body,
            SlotKind::Pendant => &mut self.pendant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_returns_previous_occupant() {
        let mut slots = EquipmentSlots::with_weapon(EquipmentId(7));
        assert_eq!(slots.replace(SlotKind::Head, EquipmentId(0)), None);
        assert_eq!(
            slots.replace(SlotKind::Weapon, EquipmentId(8)),
            Some(EquipmentId(7))
        );
        assert_eq!(slots.get(SlotKind::Weapon), Some(EquipmentId(8)));
    }

    #[test]
    fn equipped_skips_empty_slots_in_display_order() {
        let mut slots = EquipmentSlots::with_weapon(EquipmentId(7));
        slots.replace(SlotKind::Pendant, EquipmentId(1));

        let worn: Vec<_> = slots.equipped().collect();
        assert_eq!(
            worn,
            vec![
                (SlotKind::Weapon, EquipmentId(7)),
                (SlotKind::Pendant, EquipmentId(1)),
            ]
        );
    }
}
