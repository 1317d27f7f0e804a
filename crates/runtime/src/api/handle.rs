//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! submitting intents, reading the floor, or streaming events from specific
//! topics.
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, mpsc, oneshot};

use crawler_core::{FloorSnapshot, Intent, SessionState, TurnPhase, TurnReport};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Submit the controlled entity's intent for the current turn.
    ///
    /// Rejected intents (wrong phase, idle, still moving) come back as
    /// [`RuntimeError::Intent`] and leave the turn open.
    pub async fn submit_intent(&self, intent: Intent) -> Result<TurnReport> {
        self.request(|reply| Command::SubmitIntent { intent, reply })
            .await?
    }

    /// Read-only view of the current floor.
    pub async fn snapshot(&self) -> Result<FloorSnapshot> {
        self.request(|reply| Command::QuerySnapshot { reply }).await?
    }

    /// Session values the controlled entity currently carries.
    pub async fn session(&self) -> Result<SessionState> {
        self.request(|reply| Command::QuerySession { reply }).await?
    }

    /// Waits until the controlled entity may act or the run is over.
    ///
    /// Returns the snapshot taken at that moment.
    pub async fn wait_for_control(&self) -> Result<FloorSnapshot> {
        let mut turns = self.subscribe(Topic::Turn);
        loop {
            let snapshot = self.snapshot().await?;
            if snapshot.phase == TurnPhase::ControlledTurn || snapshot.phase.is_terminal() {
                return Ok(snapshot);
            }
            match turns.recv().await {
                Ok(_) | Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => return Err(RuntimeError::CommandChannelClosed),
            }
        }
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Hud` - Damage, healing, heart capacity and equipment changes
    /// - `Topic::Turn` - Turn phase changes
    /// - `Topic::Presentation` - Movement, combat, audio and music signals
    /// - `Topic::Floor` - Floor start, completion and the end of the run
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use crawler_runtime::Topic;
    ///
    /// let mut hud_rx = handle.subscribe(Topic::Hud);
    /// while let Ok(event) = hud_rx.recv().await {
    ///     // Redraw hearts
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
