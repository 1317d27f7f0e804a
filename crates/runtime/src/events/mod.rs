//! Topic-based event bus for runtime events.
//!
//! Events are published to a topic and consumers subscribe only to the topics
//! they need. [`HudBridge`] forwards the core's HUD notifications onto the
//! [`Topic::Hud`] channel.

mod bridge;
mod bus;
mod types;

pub use bridge::HudBridge;
pub use bus::{Event, EventBus, Topic};
pub use types::{FloorEvent, TurnEvent};
