use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::GameConfig;

use super::{EntityId, Position};

bitflags! {
    /// Collision layers a body can sit on.
    ///
    /// Movement queries only consider `BLOCKING` bodies. `TRIGGER` bodies
    /// (consumables, the exit) are entered rather than collided with.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionLayer: u8 {
        const BLOCKING = 1 << 0;
        const TRIGGER = 1 << 1;
    }
}

/// Reference to whatever owns a body on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyRef {
    Controlled,
    Autonomous(EntityId),
    Obstacle(EntityId),
    Equipment(EntityId),
    Consumable(EntityId),
    Exit,
    /// Indestructible boundary outside the walkable board.
    Boundary,
}

impl BodyRef {
    pub fn layer(self) -> CollisionLayer {
        match self {
            BodyRef::Consumable(_) | BodyRef::Exit => CollisionLayer::TRIGGER,
            _ => CollisionLayer::BLOCKING,
        }
    }

    pub fn entity(self) -> Option<EntityId> {
        match self {
            BodyRef::Controlled => Some(EntityId::CONTROLLED),
            BodyRef::Autonomous(id)
            | BodyRef::Obstacle(id)
            | BodyRef::Equipment(id)
            | BodyRef::Consumable(id) => Some(id),
            BodyRef::Exit | BodyRef::Boundary => None,
        }
    }
}

type BodySlots = ArrayVec<BodyRef, { GameConfig::MAX_BODIES_PER_CELL }>;

/// Occupancy of every cell that currently holds a body.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TileMap {
    occupancy: BTreeMap<Position, BodySlots>,
}

impl TileMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bodies(&self, position: Position) -> impl Iterator<Item = BodyRef> + '_ {
        self.occupancy
            .get(&position)
            .into_iter()
            .flat_map(|slots| slots.iter().copied())
    }

    /// First body on `position` whose layer intersects `mask`, ignoring `exclude`.
    pub fn first_on(
        &self,
        position: Position,
        mask: CollisionLayer,
        exclude: Option<BodyRef>,
    ) -> Option<BodyRef> {
        self.bodies(position)
            .find(|body| Some(*body) != exclude && body.layer().intersects(mask))
    }

    /// Returns true if nothing on `mask` occupies `position`.
    pub fn is_clear(&self, position: Position, mask: CollisionLayer) -> bool {
        self.first_on(position, mask, None).is_none()
    }

    pub fn add(&mut self, position: Position, body: BodyRef) -> bool {
        let slot = self.occupancy.entry(position).or_default();
        if slot.contains(&body) {
            return true;
        }
        slot.try_push(body).is_ok()
    }

    pub fn remove(&mut self, position: Position, body: BodyRef) -> bool {
        let Some(slot) = self.occupancy.get_mut(&position) else {
            return false;
        };
        let Some(index) = slot.iter().position(|occupant| *occupant == body) else {
            return false;
        };
        slot.remove(index);
        if slot.is_empty() {
            self.occupancy.remove(&position);
        }
        true
    }

    /// Moves `body` between cells, restoring the origin if the destination is full.
    pub fn relocate(&mut self, from: Position, to: Position, body: BodyRef) -> bool {
        if !self.remove(from, body) {
            return false;
        }
        if !self.add(to, body) {
            let _ = self.add(from, body);
            return false;
        }
        true
    }

    pub fn occupied_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.occupancy.keys().copied()
    }
}
