use crate::env::{BoardDimensions, ConsumableKind};
use crate::events::MusicTrack;
use crate::state::{EquipmentId, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Floor,
    Boundary,
}

/// Cosmetic tile. Has no effect on occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutTile {
    pub position: Position,
    pub kind: TileKind,
    pub variant: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementKind {
    Obstacle { hit_points: i32 },
    Consumable(ConsumableKind),
    Enemy { template: u16 },
    Boss { template: u16 },
    Equipment(EquipmentId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub position: Position,
    pub kind: PlacementKind,
}

/// Everything needed to build one floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorPlan {
    pub floor: u32,
    pub board: BoardDimensions,
    pub layout: Vec<LayoutTile>,
    /// Random placements in generation order.
    pub placements: Vec<Placement>,
    pub exit: Position,
    pub music: MusicTrack,
}

impl FloorPlan {
    pub fn count(&self, matches: impl Fn(&PlacementKind) -> bool) -> usize {
        self.placements
            .iter()
            .filter(|placement| matches(&placement.kind))
            .count()
    }

    pub fn enemy_count(&self) -> usize {
        self.count(|kind| matches!(kind, PlacementKind::Enemy { .. }))
    }

    pub fn boss_count(&self) -> usize {
        self.count(|kind| matches!(kind, PlacementKind::Boss { .. }))
    }
}
