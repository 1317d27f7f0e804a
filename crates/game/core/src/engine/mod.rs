//! Turn scheduling and the rules that run inside a turn.
//!
//! A [`FloorEngine`] owns one generated floor. The driver feeds it intents
//! with [`FloorEngine::submit_intent`] and the current time with
//! [`FloorEngine::advance`]; the engine answers with phase changes, HUD events
//! on its [`EventBus`] and a queue of presentation [`Signal`]s. A
//! [`Campaign`] strings floors together and carries the [`SessionState`]
//! between them.

mod autonomous;
mod campaign;
mod controlled;
mod errors;
mod snapshot;
mod turns;

#[cfg(test)]
mod tests;

pub use campaign::{Campaign, CampaignError};
pub use controlled::{TurnOutcome, TurnReport};
pub use errors::{IntentError, TurnError};
pub use snapshot::{AutonomousView, ControlledView, FloorSnapshot, PlacedView};
pub use turns::{SweepStep, TurnPhase, TurnScheduler};

use std::sync::Arc;

use crate::config::GameConfig;
use crate::env::{BoardDimensions, Catalogs};
use crate::events::{EventBus, HudEvent, HudObserver, Signal};
use crate::generate::{FloorPlan, GenerationError, LayoutTile, PlacementKind};
use crate::state::{
    AutonomousEntity, BodyRef, ConsumableDrop, ControlledEntity, EntityId, EquipmentDrop, Motion,
    Obstacle, Position, SessionState, Tick, TileMap,
};

/// Authoritative state of one floor.
pub struct FloorEngine {
    floor: u32,
    config: Arc<GameConfig>,
    catalogs: Catalogs,
    map: TileMap,
    controlled: ControlledEntity,
    autonomous: Vec<AutonomousEntity>,
    obstacles: Vec<Obstacle>,
    equipment: Vec<EquipmentDrop>,
    consumables: Vec<ConsumableDrop>,
    layout: Vec<LayoutTile>,
    exit: Position,
    scheduler: TurnScheduler,
    bus: EventBus,
    signals: Vec<Signal>,
    clock: Tick,
}

impl FloorEngine {
    /// Builds the floor described by `plan` around a controlled entity
    /// restored from `session`.
    ///
    /// The floor starts in [`TurnPhase::Setup`] and releases control after
    /// the configured floor start delay.
    pub fn new(
        plan: FloorPlan,
        session: &SessionState,
        config: Arc<GameConfig>,
        catalogs: Catalogs,
        bus: EventBus,
        now: Tick,
    ) -> Result<Self, GenerationError> {
        let FloorPlan {
            floor,
            board,
            layout,
            placements,
            exit,
            music,
        } = plan;

        let entry = board.entry();
        let controlled =
            ControlledEntity::from_session(session, entry, config.timing.controlled_move_time);

        let mut map = TileMap::new();
        map.add(entry, BodyRef::Controlled);
        map.add(exit, BodyRef::Exit);

        let mut scheduler = TurnScheduler::new(config.timing.turn_delay);
        let mut autonomous = Vec::new();
        let mut obstacles = Vec::new();
        let mut equipment = Vec::new();
        let mut consumables = Vec::new();

        for (index, placement) in placements.into_iter().enumerate() {
            let id = EntityId(index as u32 + 1);
            let position = placement.position;
            match placement.kind {
                PlacementKind::Obstacle { hit_points } => {
                    map.add(position, BodyRef::Obstacle(id));
                    obstacles.push(Obstacle {
                        id,
                        position,
                        hit_points,
                        active: true,
                    });
                }
                PlacementKind::Consumable(kind) => {
                    map.add(position, BodyRef::Consumable(id));
                    consumables.push(ConsumableDrop {
                        id,
                        position,
                        kind,
                        active: true,
                    });
                }
                PlacementKind::Equipment(item) => {
                    map.add(position, BodyRef::Equipment(id));
                    equipment.push(EquipmentDrop {
                        id,
                        position,
                        equipment: item,
                        active: true,
                    });
                }
                PlacementKind::Enemy { template } | PlacementKind::Boss { template } => {
                    let definition = catalogs
                        .bestiary
                        .template(template)
                        .ok_or(GenerationError::UnknownTemplate { floor, template })?;
                    map.add(position, BodyRef::Autonomous(id));
                    scheduler.register(id);
                    autonomous.push(AutonomousEntity {
                        id,
                        template,
                        position,
                        stats: definition.stats(),
                        motion: Motion::Idle,
                        move_time: definition.move_time,
                        skip_move: true,
                        is_boss: matches!(placement.kind, PlacementKind::Boss { .. }),
                    });
                }
            }
        }

        scheduler.begin_setup(now + config.timing.floor_start_delay);

        Ok(Self {
            floor,
            config,
            catalogs,
            map,
            controlled,
            autonomous,
            obstacles,
            equipment,
            consumables,
            layout,
            exit,
            scheduler,
            bus,
            signals: vec![Signal::Music(music)],
            clock: now,
        })
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn phase(&self) -> TurnPhase {
        self.scheduler.phase()
    }

    pub fn is_boss_floor(&self) -> bool {
        self.floor == self.config.boss_floor
    }

    pub fn board(&self) -> BoardDimensions {
        self.config.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &TurnScheduler {
        &self.scheduler
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn controlled(&self) -> &ControlledEntity {
        &self.controlled
    }

    /// Living autonomous entities in registration order.
    pub fn autonomous(&self) -> &[AutonomousEntity] {
        &self.autonomous
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter().filter(|obstacle| obstacle.active)
    }

    pub fn equipment_drops(&self) -> impl Iterator<Item = &EquipmentDrop> {
        self.equipment.iter().filter(|drop| drop.active)
    }

    pub fn consumables(&self) -> impl Iterator<Item = &ConsumableDrop> {
        self.consumables.iter().filter(|drop| drop.active)
    }

    pub fn layout(&self) -> &[LayoutTile] {
        &self.layout
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// Adds a HUD observer for the rest of this floor.
    pub fn subscribe(&mut self, observer: Arc<dyn HudObserver>) {
        self.bus.subscribe(observer);
    }

    /// Takes every presentation signal queued since the last call.
    pub fn drain_signals(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }

    /// Session values to carry into the next floor.
    pub fn session(&self) -> SessionState {
        self.controlled.to_session()
    }

    /// Tears the floor down, returning the session and the observer list.
    pub fn into_parts(self) -> (SessionState, EventBus) {
        (self.controlled.to_session(), self.bus)
    }

    /// Moves simulated time to `now`.
    ///
    /// Settles finished motions, releases the setup hold when due, and lets
    /// every autonomous entity whose slot in the sweep has come up act.
    pub fn advance(&mut self, now: Tick) -> TurnPhase {
        self.clock = self.clock.max(now);
        self.settle_motions(now);

        if self.scheduler.complete_setup(now) {
            return self.phase();
        }

        loop {
            let autonomous = &self.autonomous;
            let step = self.scheduler.poll_sweep(now, |id| {
                autonomous
                    .iter()
                    .find(|entity| entity.id == id)
                    .map_or(Tick::ZERO, |entity| entity.move_time)
            });
            match step {
                Some(SweepStep::Act(id)) => self.act_autonomous(id, now),
                _ => break,
            }
        }
        self.phase()
    }

    fn settle_motions(&mut self, now: Tick) {
        self.controlled.motion.advance(now);
        for entity in &mut self.autonomous {
            entity.motion.advance(now);
        }
    }

    fn publish(&self, event: HudEvent) {
        self.bus.publish(event);
    }

    fn emit(&mut self, signal: Signal) {
        self.signals.push(signal);
    }
}
