use crate::env::ConsumableKind;

use super::{
    EntityId, EquipmentId, EquipmentSlots, HeartTrack, Motion, Position, SessionState, StatSheet,
    Tick,
};

/// The single entity driven by player intents.
///
/// `stats.hit_points` mirrors the heart capacity in half-heart points; the
/// live health is the [`HeartTrack`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlledEntity {
    pub position: Position,
    pub stats: StatSheet,
    pub hearts: HeartTrack,
    pub lives: u32,
    pub slots: EquipmentSlots,
    pub motion: Motion,
    /// Interpolation time per move, used by presentation only.
    pub move_time: Tick,
    pub alive: bool,
}

impl ControlledEntity {
    /// Rebuilds the controlled entity from the values carried between floors.
    pub fn from_session(session: &SessionState, position: Position, move_time: Tick) -> Self {
        let max_halves = session.max_halves;
        Self {
            position,
            stats: StatSheet::new(session.attack, session.defense, max_halves as i32),
            hearts: HeartTrack::new(session.half_hearts.min(max_halves), max_halves),
            lives: session.lives,
            slots: session.slots,
            motion: Motion::Idle,
            move_time,
            alive: true,
        }
    }

    /// Values to carry into the next floor.
    pub fn to_session(&self) -> SessionState {
        SessionState {
            attack: self.stats.attack,
            defense: self.stats.defense,
            max_halves: self.hearts.max_halves(),
            half_hearts: self.hearts.total(),
            lives: self.lives,
            slots: self.slots,
        }
    }

    pub fn half_hearts(&self) -> u32 {
        self.hearts.total()
    }

    /// Re-derives the heart capacity from `stats.hit_points`.
    pub(crate) fn sync_capacity(&mut self) {
        self.hearts.set_capacity(self.stats.hit_points.max(0) as u32);
    }
}

/// Enemy-like entity swept by the scheduler.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutonomousEntity {
    pub id: EntityId,
    pub template: u16,
    pub position: Position,
    pub stats: StatSheet,
    pub motion: Motion,
    /// Pause the sweep takes after this entity acts.
    pub move_time: Tick,
    /// When set, the next move attempt is swallowed and the flag clears.
    pub skip_move: bool,
    pub is_boss: bool,
}

impl AutonomousEntity {
    pub fn is_alive(&self) -> bool {
        !self.stats.is_depleted()
    }
}

/// Destructible wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub id: EntityId,
    pub position: Position,
    pub hit_points: i32,
    pub active: bool,
}

/// Equipment lying on the floor, waiting to be picked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentDrop {
    pub id: EntityId,
    pub position: Position,
    pub equipment: EquipmentId,
    pub active: bool,
}

/// Food or potion entered by the controlled entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumableDrop {
    pub id: EntityId,
    pub position: Position,
    pub kind: ConsumableKind,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_round_trip_preserves_values() {
        let mut session = SessionState::default();
        session.half_hearts = 5;
        session.lives = 2;
        session.attack = 4;

        let entity = ControlledEntity::from_session(&session, Position::ORIGIN, Tick(100));
        assert_eq!(entity.hearts.units(), &[2, 2, 1]);
        assert_eq!(entity.to_session(), session);
    }

    #[test]
    fn session_health_above_capacity_is_clamped() {
        let session = SessionState {
            half_hearts: 9,
            ..SessionState::default()
        };

        let entity = ControlledEntity::from_session(&session, Position::ORIGIN, Tick(100));
        assert_eq!(entity.half_hearts(), 6);
    }
}
