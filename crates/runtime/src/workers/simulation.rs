//! Simulation worker that owns the authoritative [`crawler_core::FloorEngine`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), advances the
//! floor on a fixed frame interval, moves to the next floor after an exit, and
//! publishes events to the [`EventBus`].

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error, info, trace};

use crawler_core::{
    Campaign, FloorEngine, FloorSnapshot, Intent, SessionState, Tick, TurnPhase, TurnReport,
};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, FloorEvent, HudBridge, TurnEvent};
use crate::repository::SessionStore;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Apply the controlled entity's intent for the current turn.
    SubmitIntent {
        intent: Intent,
        reply: oneshot::Sender<Result<TurnReport>>,
    },
    /// Read the current floor (read-only).
    QuerySnapshot {
        reply: oneshot::Sender<Result<FloorSnapshot>>,
    },
    /// Read the session values the controlled entity currently carries.
    QuerySession {
        reply: oneshot::Sender<Result<SessionState>>,
    },
}

/// Background task that drives the campaign.
///
/// Time is measured from the moment the worker starts; every frame the live
/// floor is advanced to the current clock and whatever it queued is
/// published.
pub struct SimulationWorker {
    campaign: Campaign,
    engine: Option<FloorEngine>,
    store: Arc<dyn SessionStore>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    frame_interval: Duration,
    epoch: Instant,
    last_phase: TurnPhase,
    last_sweeps: u64,
    exit_deadline: Option<Tick>,
}

impl SimulationWorker {
    /// Creates the worker and opens the campaign's first floor.
    pub fn start(
        campaign: Campaign,
        store: Arc<dyn SessionStore>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        frame_interval: Duration,
    ) -> Result<Self> {
        let mut worker = Self {
            campaign,
            engine: None,
            store,
            command_rx,
            event_bus: event_bus.clone(),
            frame_interval,
            epoch: Instant::now(),
            last_phase: TurnPhase::Setup,
            last_sweeps: 0,
            exit_deadline: None,
        };

        let mut hud = crawler_core::EventBus::new();
        hud.subscribe(Arc::new(HudBridge::new(event_bus)));
        worker.open_floor(hud, Tick::ZERO)?;

        Ok(worker)
    }

    /// Main worker loop.
    ///
    /// Returns when every command sender is gone, or with the error that
    /// ended the run.
    pub async fn run(mut self) -> Result<()> {
        let mut frames = time::interval(self.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            let step = tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                _ = frames.tick() => self.on_frame(),
            };

            if let Err(error) = step {
                error!(target: "runtime::worker", error = %error, "Run aborted");
                self.event_bus.publish(Event::Floor(FloorEvent::Aborted {
                    floor: self.campaign.floor(),
                    reason: error.to_string(),
                }));
                return Err(error);
            }
        }

        debug!(target: "runtime::worker", "Command channel closed, stopping");
        Ok(())
    }

    fn clock(&self) -> Tick {
        Tick::from_millis(self.epoch.elapsed().as_millis() as u64)
    }

    fn handle_command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::SubmitIntent { intent, reply } => {
                let now = self.clock();
                let result = match self.engine.as_mut() {
                    Some(engine) => engine
                        .submit_intent(intent, now)
                        .map_err(RuntimeError::from),
                    None => Err(RuntimeError::NoActiveFloor),
                };
                match &result {
                    Ok(report) => debug!(
                        target: "runtime::worker",
                        direction = ?report.direction,
                        outcome = ?report.outcome,
                        "Intent resolved"
                    ),
                    Err(error) => {
                        debug!(target: "runtime::worker", error = %error, "Intent rejected")
                    }
                }

                // Publish what the turn caused before the caller hears back.
                let flushed = self.flush(now);
                if reply.send(result).is_err() {
                    debug!("SubmitIntent reply channel closed (caller dropped)");
                }
                flushed
            }
            Command::QuerySnapshot { reply } => {
                let snapshot = self
                    .engine
                    .as_ref()
                    .map(FloorEngine::snapshot)
                    .ok_or(RuntimeError::NoActiveFloor);
                if reply.send(snapshot).is_err() {
                    debug!("QuerySnapshot reply channel closed (caller dropped)");
                }
                Ok(())
            }
            Command::QuerySession { reply } => {
                let session = self
                    .engine
                    .as_ref()
                    .map(FloorEngine::session)
                    .ok_or(RuntimeError::NoActiveFloor);
                if reply.send(session).is_err() {
                    debug!("QuerySession reply channel closed (caller dropped)");
                }
                Ok(())
            }
        }
    }

    fn on_frame(&mut self) -> Result<()> {
        let now = self.clock();

        if let Some(deadline) = self.exit_deadline {
            if now >= deadline {
                self.exit_deadline = None;
                self.descend(now)?;
            }
            return Ok(());
        }

        if let Some(engine) = self.engine.as_mut() {
            engine.advance(now);
        }
        self.flush(now)
    }

    /// Publishes queued signals and reacts to phase changes.
    fn flush(&mut self, now: Tick) -> Result<()> {
        let Some(engine) = self.engine.as_mut() else {
            return Ok(());
        };

        for signal in engine.drain_signals() {
            self.event_bus.publish(Event::Presentation(signal));
        }

        let sweeps = engine.scheduler().sweeps_completed();
        if sweeps != self.last_sweeps {
            trace!(target: "runtime::worker", sweeps, clock = %now, "Sweep complete");
            self.last_sweeps = sweeps;
        }

        let phase = engine.phase();
        if phase == self.last_phase {
            return Ok(());
        }
        let from = std::mem::replace(&mut self.last_phase, phase);
        let floor = engine.floor();
        debug!(
            target: "runtime::worker",
            floor,
            from = ?from,
            to = ?phase,
            "Turn phase changed"
        );
        self.event_bus.publish(Event::Turn(TurnEvent {
            floor,
            from,
            to: phase,
            clock: now,
        }));

        match phase {
            TurnPhase::FloorComplete => {
                info!(target: "runtime::worker", floor, "Exit reached");
                self.exit_deadline = Some(now + engine.config().timing.floor_exit_delay);
                self.event_bus.publish(Event::Floor(FloorEvent::Completed {
                    floor,
                    clock: now,
                }));
            }
            TurnPhase::GameOver => {
                info!(target: "runtime::worker", floor, "Game over");
                self.store.clear()?;
                self.event_bus
                    .publish(Event::Floor(FloorEvent::GameOver { floor, clock: now }));
            }
            TurnPhase::Won => {
                info!(target: "runtime::worker", floor, "Boss floor cleared, run won");
                self.store.save(&engine.session())?;
                self.event_bus
                    .publish(Event::Floor(FloorEvent::Won { floor, clock: now }));
            }
            TurnPhase::Setup | TurnPhase::ControlledTurn | TurnPhase::AutonomousSweep => {}
        }
        Ok(())
    }

    /// Saves the session of the completed floor and opens the next one.
    fn descend(&mut self, now: Tick) -> Result<()> {
        let engine = self.engine.take().ok_or(RuntimeError::NoActiveFloor)?;
        let finished = engine.floor();
        let (session, hud) = self.campaign.finish_floor(engine);
        self.store.save(&session)?;
        info!(
            target: "runtime::worker",
            floor = finished,
            half_hearts = session.half_hearts,
            lives = session.lives,
            "Floor left, session saved"
        );
        self.open_floor(hud, now)
    }

    fn open_floor(&mut self, hud: crawler_core::EventBus, now: Tick) -> Result<()> {
        let session = match self.store.load()? {
            Some(session) => session,
            None => self.campaign.initial_session(),
        };
        let engine = self.campaign.start_floor(&session, hud, now)?;

        let floor = engine.floor();
        let boss = engine.is_boss_floor();
        info!(
            target: "runtime::worker",
            floor,
            boss,
            autonomous = engine.autonomous().len(),
            "Floor started"
        );
        self.event_bus.publish(Event::Floor(FloorEvent::Started {
            floor,
            boss,
            clock: now,
        }));

        self.engine = Some(engine);
        self.last_sweeps = 0;
        self.flush(now)
    }
}
