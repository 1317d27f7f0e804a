//! Deterministic rules of a turn-based, grid-confined dungeon crawler.
//!
//! `crawler-core` decides where entities may move, how a single controlled
//! entity's turn alternates with a paced sweep over autonomous entities, how
//! equipment composes into combat stats and heart capacity, and how each floor
//! is populated. It performs no I/O and no logging; drivers such as
//! `crawler-runtime` feed it intents and time and forward what it emits.
//!
//! All floor state mutation flows through [`engine::FloorEngine`]; a
//! [`engine::Campaign`] strings floors together.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod events;
pub mod generate;
pub mod grid;
pub mod state;

pub use config::{ConfigError, CountRange, GameConfig, TimingConfig};
pub use engine::{
    Campaign, CampaignError, FloorEngine, FloorSnapshot, IntentError, SweepStep, TurnError,
    TurnOutcome, TurnPhase, TurnReport, TurnScheduler,
};
pub use env::{
    Bestiary, BoardDimensions, Catalogs, ConsumableEffect, ConsumableKind, EnemyTemplate,
    EquipmentCatalog, EquipmentItem, PcgRng, RngSource,
};
pub use error::{ErrorSeverity, GameError};
pub use events::{AudioCue, EventBus, HudEvent, HudObserver, MusicTrack, Signal};
pub use generate::{EquipmentPool, FloorPlan, GenerationError, LevelGenerator};
pub use grid::{Interaction, MoveProbe, try_move};
pub use state::{
    BodyRef, CardinalDirection, ControlledEntity, EntityId, EquipmentId, EquipmentSlots,
    HeartTrack, Intent, Motion, Position, SessionState, SlotKind, StatBonus, StatSheet, Tick,
    TileMap,
};
