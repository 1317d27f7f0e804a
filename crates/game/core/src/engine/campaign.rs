use std::sync::Arc;

use crate::config::{ConfigError, GameConfig};
use crate::env::{Catalogs, PcgRng};
use crate::error::{ErrorSeverity, GameError};
use crate::events::EventBus;
use crate::generate::{EquipmentPool, GenerationError, LevelGenerator};
use crate::state::{SessionState, Tick};

use super::{FloorEngine, TurnPhase};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CampaignError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("default weapon {0} is missing from the equipment catalog")]
    MissingDefaultWeapon(crate::state::EquipmentId),
}

impl GameError for CampaignError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            CampaignError::Config(error) => error.error_code(),
            CampaignError::Generation(error) => error.error_code(),
            CampaignError::MissingDefaultWeapon(_) => "CAMPAIGN_MISSING_DEFAULT_WEAPON",
        }
    }
}

/// One run from the first floor to the boss floor.
///
/// Owns what outlives a single floor: the seeded random stream and the
/// equipment pool. Session values travel explicitly through
/// [`Campaign::start_floor`] and [`Campaign::finish_floor`].
#[derive(Clone, Debug)]
pub struct Campaign {
    config: Arc<GameConfig>,
    catalogs: Catalogs,
    pool: EquipmentPool,
    rng: PcgRng,
    floor: u32,
}

impl Campaign {
    /// Validates the configuration and opens floor 1.
    pub fn new(config: GameConfig, catalogs: Catalogs, seed: u64) -> Result<Self, CampaignError> {
        config.validate()?;
        if catalogs.equipment.get(config.default_weapon).is_none() {
            return Err(CampaignError::MissingDefaultWeapon(config.default_weapon));
        }

        let pool = EquipmentPool::from_catalog(&catalogs.equipment, config.default_weapon);
        let required = config.boss_floor * config.equipment_drops;
        if (pool.len() as u32) < required {
            return Err(ConfigError::EquipmentPoolTooSmall {
                floors: config.boss_floor,
                required,
                available: pool.len() as u32,
            }
            .into());
        }

        Ok(Self {
            config: Arc::new(config),
            catalogs,
            pool,
            rng: PcgRng::seeded(seed),
            floor: 1,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Floor the next [`Campaign::start_floor`] call generates.
    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn pool(&self) -> &EquipmentPool {
        &self.pool
    }

    /// Session values of a fresh run.
    pub fn initial_session(&self) -> SessionState {
        SessionState::new(self.config.default_weapon)
    }

    /// Generates the current floor and restores the controlled entity from
    /// `session`.
    pub fn start_floor(
        &mut self,
        session: &SessionState,
        bus: EventBus,
        now: Tick,
    ) -> Result<FloorEngine, CampaignError> {
        let plan = LevelGenerator::new(&self.config, &self.catalogs.bestiary).generate(
            self.floor,
            &mut self.pool,
            &mut self.rng,
        )?;
        let engine = FloorEngine::new(
            plan,
            session,
            Arc::clone(&self.config),
            self.catalogs.clone(),
            bus,
            now,
        )?;
        Ok(engine)
    }

    /// Tears `engine` down and returns the session to persist.
    ///
    /// A completed floor moves the campaign to the next one.
    pub fn finish_floor(&mut self, engine: FloorEngine) -> (SessionState, EventBus) {
        if engine.phase() == TurnPhase::FloorComplete {
            self.floor += 1;
        }
        engine.into_parts()
    }
}
