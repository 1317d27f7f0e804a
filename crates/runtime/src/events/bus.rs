//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use crawler_core::{HudEvent, Signal};

use super::types::{FloorEvent, TurnEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Health and equipment changes for the HUD
    Hud,
    /// Turn phase changes
    Turn,
    /// Movement, combat and audio signals for the presentation layer
    Presentation,
    /// Floor lifecycle
    Floor,
}

impl Topic {
    pub const ALL: [Topic; 4] = [Topic::Hud, Topic::Turn, Topic::Presentation, Topic::Floor];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Hud(HudEvent),
    Turn(TurnEvent),
    Presentation(Signal),
    Floor(FloorEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Hud(_) => Topic::Hud,
            Event::Turn(_) => Topic::Turn,
            Event::Presentation(_) => Topic::Presentation,
            Event::Floor(_) => Topic::Floor,
        }
    }
}

struct Channels {
    hud: broadcast::Sender<Event>,
    turn: broadcast::Sender<Event>,
    presentation: broadcast::Sender<Event>,
    floor: broadcast::Sender<Event>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Hud => &self.hud,
            Topic::Turn => &self.turn,
            Topic::Presentation => &self.presentation,
            Topic::Floor => &self.floor,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks; events sent while a
/// topic has no subscribers are dropped.
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                hud: broadcast::channel(capacity).0,
                turn: broadcast::channel(capacity).0,
                presentation: broadcast::channel(capacity).0,
                floor: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.sender(topic).send(event).is_err() {
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
