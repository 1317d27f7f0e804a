//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the campaign and the live floor; everything
//! else talks to it through [`Command`]s.

mod simulation;

pub use simulation::{Command, SimulationWorker};
