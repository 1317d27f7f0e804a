//! Mutable simulation state: entities, health, equipment and occupancy.
mod common;
mod entities;
mod equipment;
mod hearts;
mod motion;
mod session;
mod stats;
mod tile_map;

pub use common::{CardinalDirection, EntityId, GridDelta, Intent, Position, Tick};
pub use entities::{
    AutonomousEntity, ConsumableDrop, ControlledEntity, EquipmentDrop, Obstacle,
};
pub use equipment::{EquipmentId, EquipmentSlots, SlotKind};
pub use hearts::{HALVES_PER_UNIT, HeartTrack};
pub use motion::Motion;
pub use session::SessionState;
pub use stats::{StatBonus, StatSheet};
pub use tile_map::{BodyRef, CollisionLayer, TileMap};
