//! Procedural floor population.
//!
//! [`LevelGenerator`] turns a floor index into a [`FloorPlan`]. Every random
//! placement draws a cell from [`FreeCells`] without replacement, so no two
//! placements on the same floor share a cell.
mod errors;
mod free_cells;
mod generator;
mod plan;
mod pool;

pub use errors::GenerationError;
pub use free_cells::FreeCells;
pub use generator::LevelGenerator;
pub use plan::{FloorPlan, LayoutTile, Placement, PlacementKind, TileKind};
pub use pool::EquipmentPool;
