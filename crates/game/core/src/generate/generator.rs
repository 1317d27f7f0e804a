use crate::config::GameConfig;
use crate::env::{Bestiary, ConsumableKind, RngSource};
use crate::events::MusicTrack;
use crate::state::Position;

use super::{
    EquipmentPool, FloorPlan, FreeCells, GenerationError, LayoutTile, Placement, PlacementKind,
    TileKind,
};

/// Builds floors from the configuration and the enemy tables.
#[derive(Clone, Copy, Debug)]
pub struct LevelGenerator<'a> {
    config: &'a GameConfig,
    bestiary: &'a Bestiary,
}

impl<'a> LevelGenerator<'a> {
    pub fn new(config: &'a GameConfig, bestiary: &'a Bestiary) -> Self {
        Self { config, bestiary }
    }

    /// Populates floor `floor` (1-based).
    ///
    /// Order: layout, inner walls, consumables, enemies or the boss,
    /// equipment, exit. Equipment ids are drawn from `pool` and never return
    /// to it.
    pub fn generate(
        &self,
        floor: u32,
        pool: &mut EquipmentPool,
        rng: &mut impl RngSource,
    ) -> Result<FloorPlan, GenerationError> {
        let board = self.config.board;
        let layout = self.layout(rng);
        let mut free = FreeCells::from_board(&board);
        let mut placements = Vec::new();

        let walls = self.config.walls.sample(rng);
        for _ in 0..walls {
            let hit_points = self.config.wall_hit_points;
            placements.push(self.place(
                floor,
                &mut free,
                rng,
                PlacementKind::Obstacle { hit_points },
            )?);
        }

        let consumables = self.config.consumables.sample(rng);
        for _ in 0..consumables {
            let kind = ConsumableKind::ALL[rng.index(ConsumableKind::ALL.len())];
            placements.push(self.place(floor, &mut free, rng, PlacementKind::Consumable(kind))?);
        }

        let music = if floor == self.config.boss_floor {
            if self.bestiary.bosses.is_empty() {
                return Err(GenerationError::EmptyBestiary { floor });
            }
            let template = self.bestiary.bosses[rng.index(self.bestiary.bosses.len())].id;
            placements.push(self.place(floor, &mut free, rng, PlacementKind::Boss { template })?);
            MusicTrack::Boss
        } else {
            let count = Self::enemy_count(floor, rng);
            if count > 0 && self.bestiary.regulars.is_empty() {
                return Err(GenerationError::EmptyBestiary { floor });
            }
            for _ in 0..count {
                let template = self.bestiary.regulars[rng.index(self.bestiary.regulars.len())].id;
                placements.push(self.place(
                    floor,
                    &mut free,
                    rng,
                    PlacementKind::Enemy { template },
                )?);
            }
            MusicTrack::Regular
        };

        for _ in 0..self.config.equipment_drops {
            let item = pool
                .draw(rng)
                .ok_or(GenerationError::EquipmentPoolExhausted { floor })?;
            placements.push(self.place(floor, &mut free, rng, PlacementKind::Equipment(item))?);
        }

        Ok(FloorPlan {
            floor,
            board,
            layout,
            placements,
            exit: board.exit(),
            music,
        })
    }

    /// Regular enemies on floor `n`: uniform in `[n, 2n]`.
    pub fn enemy_count(floor: u32, rng: &mut impl RngSource) -> u32 {
        let floor = floor as i32;
        rng.range_inclusive(floor, floor * 2).max(0) as u32
    }

    fn place(
        &self,
        floor: u32,
        free: &mut FreeCells,
        rng: &mut impl RngSource,
        kind: PlacementKind,
    ) -> Result<Placement, GenerationError> {
        let position = free
            .draw(rng)
            .ok_or(GenerationError::FreeCellsExhausted { floor })?;
        Ok(Placement { position, kind })
    }

    /// Floor tiles over the board plus a boundary ring one cell outside it.
    fn layout(&self, rng: &mut impl RngSource) -> Vec<LayoutTile> {
        let width = self.config.board.width as i32;
        let height = self.config.board.height as i32;
        let mut tiles = Vec::with_capacity(((width + 2) * (height + 2)) as usize);

        for x in -1..=width {
            for y in -1..=height {
                let boundary = x == -1 || y == -1 || x == width || y == height;
                let (kind, variants) = if boundary {
                    (TileKind::Boundary, GameConfig::BOUNDARY_TILE_VARIANTS)
                } else {
                    (TileKind::Floor, GameConfig::FLOOR_TILE_VARIANTS)
                };
                tiles.push(LayoutTile {
                    position: Position::new(x, y),
                    kind,
                    variant: rng.index(usize::from(variants)) as u8,
                });
            }
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::config::CountRange;
    use crate::env::{EquipmentCatalog, PcgRng};

    fn fixtures() -> (GameConfig, Bestiary, EquipmentPool) {
        let config = GameConfig::default();
        let pool =
            EquipmentPool::from_catalog(&EquipmentCatalog::reference(), config.default_weapon);
        (config, Bestiary::reference(), pool)
    }

    #[test]
    fn placements_never_overlap_and_avoid_border_and_exit() {
        let (config, bestiary, _) = fixtures();
        let generator = LevelGenerator::new(&config, &bestiary);

        for seed in 0..64 {
            let mut pool = EquipmentPool::from_catalog(
                &EquipmentCatalog::reference(),
                config.default_weapon,
            );
            let mut rng = PcgRng::seeded(seed);
            for floor in 1..=config.boss_floor {
                let plan = generator.generate(floor, &mut pool, &mut rng).unwrap();
                let cells: BTreeSet<_> = plan.placements.iter().map(|p| p.position).collect();

                assert_eq!(cells.len(), plan.placements.len(), "seed {seed} floor {floor}");
                assert!(!cells.contains(&plan.exit));
                assert!(cells.iter().all(|cell| !config.board.is_border(*cell)));
            }
        }
    }

    #[test]
    fn boss_floor_has_one_boss_and_no_regulars() {
        let (config, bestiary, mut pool) = fixtures();
        let generator = LevelGenerator::new(&config, &bestiary);
        let plan = generator
            .generate(config.boss_floor, &mut pool, &mut PcgRng::seeded(9))
            .unwrap();

        assert_eq!(plan.boss_count(), 1);
        assert_eq!(plan.enemy_count(), 0);
        assert_eq!(plan.music, MusicTrack::Boss);
    }

    #[test]
    fn regular_floors_scale_enemy_count_with_depth() {
        let (config, bestiary, _) = fixtures();
        let generator = LevelGenerator::new(&config, &bestiary);

        for seed in 0..32 {
            for floor in 1..config.boss_floor {
                let mut pool = EquipmentPool::from_catalog(
                    &EquipmentCatalog::reference(),
                    config.default_weapon,
                );
                let plan = generator
                    .generate(floor, &mut pool, &mut PcgRng::seeded(seed))
                    .unwrap();
                let enemies = plan.enemy_count() as u32;

                assert!((floor..=floor * 2).contains(&enemies));
                assert_eq!(plan.boss_count(), 0);
                assert_eq!(plan.music, MusicTrack::Regular);
            }
        }
    }

    #[test]
    fn equipment_does_not_repeat_across_floors() {
        let (config, bestiary, mut pool) = fixtures();
        let generator = LevelGenerator::new(&config, &bestiary);
        let mut rng = PcgRng::seeded(21);
        let mut dropped = Vec::new();

        for floor in 1..=config.boss_floor {
            let plan = generator.generate(floor, &mut pool, &mut rng).unwrap();
            for placement in &plan.placements {
                if let PlacementKind::Equipment(item) = placement.kind {
                    assert!(!dropped.contains(&item));
                    dropped.push(item);
                }
            }
        }
        assert_eq!(dropped.len() as u32, config.boss_floor * config.equipment_drops);
    }

    #[test]
    fn exhausted_equipment_pool_fails_loudly() {
        let (config, bestiary, mut pool) = fixtures();
        let generator = LevelGenerator::new(&config, &bestiary);
        let mut rng = PcgRng::seeded(2);
        while pool.draw(&mut rng).is_some() {}

        assert_eq!(
            generator.generate(1, &mut pool, &mut rng),
            Err(GenerationError::EquipmentPoolExhausted { floor: 1 })
        );
    }

    #[test]
    fn exhausted_free_cells_fail_loudly() {
        let config = GameConfig {
            walls: CountRange::new(40, 40),
            ..GameConfig::default()
        };
        let (_, bestiary, mut pool) = fixtures();
        let generator = LevelGenerator::new(&config, &bestiary);

        assert_eq!(
            generator.generate(1, &mut pool, &mut PcgRng::seeded(1)),
            Err(GenerationError::FreeCellsExhausted { floor: 1 })
        );
    }

    #[test]
    fn negative_ranges_place_nothing() {
        let config = GameConfig {
            walls: CountRange::new(-3, -1),
            consumables: CountRange::new(-2, 0),
            ..GameConfig::default()
        };
        let (_, bestiary, mut pool) = fixtures();
        let plan = LevelGenerator::new(&config, &bestiary)
            .generate(1, &mut pool, &mut PcgRng::seeded(4))
            .unwrap();

        assert_eq!(
            plan.count(|kind| matches!(kind, PlacementKind::Obstacle { .. })),
            0
        );
        assert_eq!(
            plan.count(|kind| matches!(kind, PlacementKind::Consumable(_))),
            0
        );
    }

    #[test]
    fn layout_rings_the_board_with_boundary_tiles() {
        let (config, bestiary, mut pool) = fixtures();
        let plan = LevelGenerator::new(&config, &bestiary)
            .generate(1, &mut pool, &mut PcgRng::seeded(8))
            .unwrap();

        let boundary = plan
            .layout
            .iter()
            .filter(|tile| tile.kind == TileKind::Boundary)
            .count();
        assert_eq!(boundary, 36);
        assert_eq!(plan.layout.len(), 100);
    }
}
