use crate::env::ConsumableKind;
use crate::state::{EntityId, EquipmentId, Position, Tick};

/// Audio categories. The presentation layer picks the actual clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AudioCue {
    Move,
    Eat,
    Drink,
    Chop,
    EnemyAttack,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MusicTrack {
    Regular,
    Boss,
    Silence,
}

/// Presentation-only notification. Never read back for game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signal {
    /// An entity started interpolating between two cells.
    Moved {
        entity: EntityId,
        from: Position,
        to: Position,
        duration: Tick,
    },
    /// `attacker` swung at `target`.
    Attack { attacker: EntityId, target: EntityId },
    /// `entity` took a hit.
    Hit { entity: EntityId },
    /// `entity` left play.
    Death { entity: EntityId },
    /// An inner wall was chopped; `remaining` may be zero or below.
    ObstacleDamaged { obstacle: EntityId, remaining: i32 },
    /// A consumable was picked up.
    ItemConsumed { item: EntityId, kind: ConsumableKind },
    /// An item left its slot and is listed as available again.
    EquipmentReleased { item: EquipmentId },
    Cue(AudioCue),
    Music(MusicTrack),
}
