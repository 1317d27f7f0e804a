use crate::env::{BoardDimensions, EquipmentCatalog, RngSource};
use crate::state::{EquipmentId, Tick};

/// Inclusive `[min, max]` range for a random placement count.
///
/// Zero or negative results place nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountRange {
    pub min: i32,
    pub max: i32,
}

impl CountRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Draws a count from the range. Never negative.
    pub fn sample(&self, rng: &mut impl RngSource) -> u32 {
        rng.range_inclusive(self.min, self.max).max(0) as u32
    }

    /// Largest count the range can produce.
    pub fn upper_bound(&self) -> u32 {
        self.min.max(self.max).max(0) as u32
    }
}

/// Delays that pace the turn loop and presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TimingConfig {
    /// Pause before an autonomous sweep starts (and again when nobody acts).
    pub turn_delay: Tick,
    /// How long the floor title stays up before the first controlled turn.
    pub floor_start_delay: Tick,
    /// Interpolation time of a controlled move.
    pub controlled_move_time: Tick,
    /// Pause between stepping onto the exit and loading the next floor.
    pub floor_exit_delay: Tick,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            turn_delay: Tick::from_millis(100),
            floor_start_delay: Tick::from_millis(500),
            controlled_move_time: Tick::from_millis(100),
            floor_exit_delay: Tick::from_millis(1000),
        }
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    pub board: BoardDimensions,
    /// Inner walls placed per floor.
    pub walls: CountRange,
    /// Consumables placed per floor.
    pub consumables: CountRange,
    /// Equipment drops placed per floor.
    pub equipment_drops: u32,
    /// Hit points of a freshly placed inner wall.
    pub wall_hit_points: i32,
    /// Damage dealt to a wall per hit, independent of stats.
    pub wall_damage: i32,
    /// Floor index that holds the boss. Clearing it wins the run.
    pub boss_floor: u32,
    /// Weapon the controlled entity starts with. Never enters the drop pool.
    pub default_weapon: EquipmentId,
    pub timing: TimingConfig,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Heart units a track can hold.
    pub const MAX_HEART_UNITS: usize = 32;
    /// Bodies that can share a single cell (e.g. an enemy standing on food).
    pub const MAX_BODIES_PER_CELL: usize = 4;
    /// Cosmetic floor tile variants.
    pub const FLOOR_TILE_VARIANTS: u8 = 8;
    /// Cosmetic boundary tile variants.
    pub const BOUNDARY_TILE_VARIANTS: u8 = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BOARD: BoardDimensions = BoardDimensions::new(8, 8);
    pub const DEFAULT_WALLS: CountRange = CountRange::new(5, 9);
    pub const DEFAULT_CONSUMABLES: CountRange = CountRange::new(1, 2);
    pub const DEFAULT_BOSS_FLOOR: u32 = 4;
    pub const DEFAULT_WALL_HIT_POINTS: i32 = 3;

    pub fn new() -> Self {
        Self {
            board: Self::DEFAULT_BOARD,
            walls: Self::DEFAULT_WALLS,
            consumables: Self::DEFAULT_CONSUMABLES,
            equipment_drops: 1,
            wall_hit_points: Self::DEFAULT_WALL_HIT_POINTS,
            wall_damage: 1,
            boss_floor: Self::DEFAULT_BOSS_FLOOR,
            default_weapon: EquipmentCatalog::DEFAULT_WEAPON,
            timing: TimingConfig::default(),
        }
    }

    /// Most enemies any non-boss floor can ask for.
    pub fn max_regular_enemies(&self) -> u32 {
        self.boss_floor.saturating_sub(1) * 2
    }

    /// Checks that every floor of a run fits on the board.
    ///
    /// Placement draws cells without replacement, so the worst case of every
    /// range must fit in the interior or generation would run dry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width < 3 || self.board.height < 3 {
            return Err(ConfigError::BoardTooSmall {
                width: self.board.width,
                height: self.board.height,
            });
        }
        if self.boss_floor == 0 {
            return Err(ConfigError::NoBossFloor);
        }

        let required = self.walls.upper_bound()
            + self.consumables.upper_bound()
            + self.max_regular_enemies().max(1)
            + self.equipment_drops;
        let available = self.board.interior_cell_count();
        if required > available {
            return Err(ConfigError::BoardOverfilled {
                required,
                available,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration that cannot produce a playable run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board {width}x{height} has no interior")]
    BoardTooSmall { width: u32, height: u32 },

    #[error("boss floor must be at least 1")]
    NoBossFloor,

    #[error("worst-case floor needs {required} free cells but the interior has {available}")]
    BoardOverfilled { required: u32, available: u32 },

    #[error("{floors} floors draw {required} equipment drops but the pool holds {available}")]
    EquipmentPoolTooSmall {
        floors: u32,
        required: u32,
        available: u32,
    },
}
