//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the campaign.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{info, trace};

use crawler_content::ContentFactory;
use crawler_core::{Campaign, Catalogs, GameConfig, TurnPhase, TurnReport};

use crate::api::{IntentProvider, Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::repository::{InMemorySessionStore, SessionStore};
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// How often the worker advances the live floor.
    pub frame_interval: Duration,
    /// Seed of the campaign's random stream; a random seed when unset.
    pub seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
            frame_interval: Duration::from_millis(16),
            seed: None,
        }
    }
}

/// Main runtime that orchestrates the campaign
///
/// Runtime owns the worker and the intent provider. [`RuntimeHandle`]
/// provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    intent_provider: Option<Box<dyn IntentProvider>>,
    frame_interval: Duration,
    sim_worker_handle: JoinHandle<Result<()>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to events from a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Plays one controlled turn.
    ///
    /// Waits for control, asks the intent provider for an intent and submits
    /// it. Returns `None` when the intent did not consume the turn (idle,
    /// still moving) or the run is over.
    pub async fn step(&mut self) -> Result<Option<TurnReport>> {
        let provider = self
            .intent_provider
            .as_ref()
            .ok_or(RuntimeError::ProviderNotSet)?;

        let snapshot = self.handle.wait_for_control().await?;
        if snapshot.phase.is_terminal() {
            return Ok(None);
        }

        let intent = provider.provide_intent(&snapshot).await?;
        match self.handle.submit_intent(intent).await {
            Ok(report) => Ok(Some(report)),
            Err(error) if error.is_recoverable() => {
                trace!(target: "runtime", error = %error, "Intent did not take the turn");
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    /// Plays until the run ends and returns the final phase.
    pub async fn run(&mut self) -> Result<TurnPhase> {
        loop {
            if self.step().await?.is_some() {
                continue;
            }
            let phase = self.handle.snapshot().await?.phase;
            if phase.is_terminal() {
                info!(target: "runtime", phase = ?phase, "Run finished");
                return Ok(phase);
            }
            tokio::time::sleep(self.frame_interval).await;
        }
    }

    /// Set the intent provider
    pub fn set_intent_provider(&mut self, provider: impl IntentProvider + 'static) {
        self.intent_provider = Some(Box::new(provider));
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every [`RuntimeHandle`] clone is dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?
    }
}

/// Builder for [`Runtime`] with flexible configuration.
///
/// Configuration and catalogs come from, in order: explicit values, a
/// [`ContentFactory`], the built-in defaults.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    game_config: Option<GameConfig>,
    catalogs: Option<Catalogs>,
    content: Option<ContentFactory>,
    session_store: Option<Arc<dyn SessionStore>>,
    intent_provider: Option<Box<dyn IntentProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            game_config: None,
            catalogs: None,
            content: None,
            session_store: None,
            intent_provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the campaign seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn game_config(mut self, config: GameConfig) -> Self {
        self.game_config = Some(config);
        self
    }

    pub fn catalogs(mut self, catalogs: Catalogs) -> Self {
        self.catalogs = Some(catalogs);
        self
    }

    /// Load whatever was not set explicitly from a content directory
    pub fn content(mut self, factory: ContentFactory) -> Self {
        self.content = Some(factory);
        self
    }

    /// Set the session store (default: [`InMemorySessionStore`])
    pub fn session_store(mut self, store: impl SessionStore + 'static) -> Self {
        self.session_store = Some(Arc::new(store));
        self
    }

    /// Share a session store with the caller
    pub fn shared_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    /// Set the intent provider (optional)
    pub fn intent_provider(mut self, provider: impl IntentProvider + 'static) -> Self {
        self.intent_provider = Some(Box::new(provider));
        self
    }

    /// Build the runtime and open the first floor
    pub async fn build(self) -> Result<Runtime> {
        let RuntimeBuilder {
            config,
            game_config,
            catalogs,
            content,
            session_store,
            intent_provider,
        } = self;

        let game_config = match (game_config, &content) {
            (Some(game_config), _) => game_config,
            (None, Some(factory)) => factory.load_config()?,
            (None, None) => GameConfig::default(),
        };
        let catalogs = match (catalogs, &content) {
            (Some(catalogs), _) => catalogs,
            (None, Some(factory)) => factory.load_catalogs()?,
            (None, None) => Catalogs::reference(),
        };

        let seed = config.seed.unwrap_or_else(rand::random);
        info!(target: "runtime", seed, boss_floor = game_config.boss_floor, "Starting campaign");
        let campaign = Campaign::new(game_config, catalogs, seed)?;

        let store = session_store.unwrap_or_else(|| Arc::new(InMemorySessionStore::new()));

        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size);
        let event_bus = EventBus::with_capacity(config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let sim_worker = SimulationWorker::start(
            campaign,
            store,
            command_rx,
            event_bus,
            config.frame_interval,
        )?;
        let sim_worker_handle = tokio::spawn(sim_worker.run());

        Ok(Runtime {
            handle,
            intent_provider,
            frame_interval: config.frame_interval,
            sim_worker_handle,
        })
    }
}
