use super::{EquipmentId, EquipmentSlots};

/// Values carried by the controlled entity across floor transitions.
///
/// Read once when a floor starts and written once when it ends. Nothing here
/// survives a process restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SessionState {
    pub attack: i32,
    pub defense: i32,
    /// Heart capacity in half-heart points.
    pub max_halves: u32,
    /// Current health in half-heart points.
    pub half_hearts: u32,
    /// Spare lives.
    pub lives: u32,
    pub slots: EquipmentSlots,
}

impl SessionState {
    /// Starting values for a new run: three full hearts, no spare lives, attack 1
    /// from the default weapon.
    pub fn new(default_weapon: EquipmentId) -> Self {
        Self {
            attack: 1,
            defense: 0,
            max_halves: 6,
            half_hearts: 6,
            lives: 0,
            slots: EquipmentSlots::with_weapon(default_weapon),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(crate::env::EquipmentCatalog::DEFAULT_WEAPON)
    }
}
