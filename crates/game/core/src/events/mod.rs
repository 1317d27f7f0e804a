//! Notifications leaving the simulation.
//!
//! [`HudEvent`]s go through the [`EventBus`] to subscribed observers and are
//! limited to four kinds. Everything else the presentation layer needs
//! (movement, attacks, audio, music) is queued as a [`Signal`] and drained by
//! the driver.
mod bus;
mod signal;

pub use bus::{EventBus, HudEvent, HudObserver};
pub use signal::{AudioCue, MusicTrack, Signal};
