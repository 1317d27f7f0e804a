use strum::{Display, EnumIter};

use crate::events::AudioCue;

/// Food and potions scattered on a floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumableKind {
    Candy,
    Banana,
    Cookies,
    HeartPotion,
    LifePotion,
}

/// What entering a consumable does to the controlled entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsumableEffect {
    /// Restore this many half-heart points.
    Heal(u32),
    /// Grant one spare life.
    ExtraLife,
}

impl ConsumableKind {
    pub const ALL: [ConsumableKind; 5] = [
        ConsumableKind::Candy,
        ConsumableKind::Banana,
        ConsumableKind::Cookies,
        ConsumableKind::HeartPotion,
        ConsumableKind::LifePotion,
    ];

    pub fn effect(self) -> ConsumableEffect {
        match self {
            ConsumableKind::Candy => ConsumableEffect::Heal(1),
            ConsumableKind::Banana => ConsumableEffect::Heal(2),
            ConsumableKind::Cookies => ConsumableEffect::Heal(4),
            ConsumableKind::HeartPotion => ConsumableEffect::Heal(6),
            ConsumableKind::LifePotion => ConsumableEffect::ExtraLife,
        }
    }

    pub fn cue(self) -> AudioCue {
        match self {
            ConsumableKind::HeartPotion | ConsumableKind::LifePotion => AudioCue::Drink,
            _ => AudioCue::Eat,
        }
    }
}
