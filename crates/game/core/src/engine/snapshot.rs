//! Read-only views handed to the presentation layer.

use crate::generate::LayoutTile;
use crate::state::{EntityId, EquipmentId, Motion, Position, SlotKind, StatSheet};

use super::{FloorEngine, TurnPhase};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlledView {
    pub position: Position,
    pub motion: Motion,
    pub stats: StatSheet,
    /// Heart units in display order, each holding 0..=2 half-heart points.
    pub hearts: Vec<u8>,
    pub half_hearts: u32,
    pub max_halves: u32,
    pub lives: u32,
    pub equipped: Vec<(SlotKind, EquipmentId)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutonomousView {
    pub id: EntityId,
    pub template: u16,
    pub position: Position,
    pub motion: Motion,
    pub hit_points: i32,
    pub is_boss: bool,
}

/// Something placed on the floor: an inner wall, a consumable or equipment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedView<T> {
    pub id: EntityId,
    pub position: Position,
    pub value: T,
}

/// Everything needed to draw a floor at one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorSnapshot {
    pub floor: u32,
    pub phase: TurnPhase,
    pub controlled: ControlledView,
    pub autonomous: Vec<AutonomousView>,
    /// Remaining hit points per inner wall.
    pub obstacles: Vec<PlacedView<i32>>,
    pub consumables: Vec<PlacedView<crate::env::ConsumableKind>>,
    pub equipment: Vec<PlacedView<EquipmentId>>,
    pub exit: Position,
    pub layout: Vec<LayoutTile>,
}

impl FloorEngine {
    pub fn snapshot(&self) -> FloorSnapshot {
        let controlled = &self.controlled;
        FloorSnapshot {
            floor: self.floor,
            phase: self.phase(),
            controlled: ControlledView {
                position: controlled.position,
                motion: controlled.motion,
                stats: controlled.stats,
                hearts: controlled.hearts.units().to_vec(),
                half_hearts: controlled.hearts.total(),
                max_halves: controlled.hearts.max_halves(),
                lives: controlled.lives,
                equipped: controlled.slots.equipped().collect(),
            },
            autonomous: self
                .autonomous
                .iter()
                .map(|entity| AutonomousView {
                    id: entity.id,
                    template: entity.template,
                    position: entity.position,
                    motion: entity.motion,
                    hit_points: entity.stats.hit_points,
                    is_boss: entity.is_boss,
                })
                .collect(),
            obstacles: self
                .obstacles()
                .map(|obstacle| PlacedView {
                    id: obstacle.id,
                    position: obstacle.position,
                    value: obstacle.hit_points,
                })
                .collect(),
            consumables: self
                .consumables()
                .map(|drop| PlacedView {
                    id: drop.id,
                    position: drop.position,
                    value: drop.kind,
                })
                .collect(),
            equipment: self
                .equipment_drops()
                .map(|drop| PlacedView {
                    id: drop.id,
                    position: drop.position,
                    value: drop.equipment,
                })
                .collect(),
            exit: self.exit,
            layout: self.layout.clone(),
        }
    }
}
