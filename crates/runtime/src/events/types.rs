//! Event types for the turn and floor topics.

use crawler_core::{Tick, TurnPhase};
use serde::{Deserialize, Serialize};

/// The turn state machine moved to another phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEvent {
    pub floor: u32,
    pub from: TurnPhase,
    pub to: TurnPhase,
    /// Runtime clock when the change was observed.
    pub clock: Tick,
}

/// Floor lifecycle and the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloorEvent {
    /// A freshly generated floor entered setup.
    Started { floor: u32, boss: bool, clock: Tick },

    /// The exit of a regular floor was reached; the next floor follows after
    /// the exit delay.
    Completed { floor: u32, clock: Tick },

    /// Out of hearts and lives.
    GameOver { floor: u32, clock: Tick },

    /// The exit of the boss floor was reached.
    Won { floor: u32, clock: Tick },

    /// The run could not continue.
    Aborted { floor: u32, reason: String },
}
