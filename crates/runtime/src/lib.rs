//! Runtime orchestration for the crawler simulation.
//!
//! This crate wires together the intent provider abstraction, the session
//! store and the simulation worker into a cohesive runtime API. Consumers
//! embed [`Runtime`] to play turns, subscribe to events, and read the floor
//! through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`repository`] carries session values between floors
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{
    IdleIntentProvider, IntentProvider, Result, RuntimeError, RuntimeHandle,
    ScriptedIntentProvider,
};
pub use events::{Event, EventBus, FloorEvent, HudBridge, Topic, TurnEvent};
pub use repository::{InMemorySessionStore, RepositoryError, SessionStore};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
