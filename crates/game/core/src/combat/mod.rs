//! Combat resolution.
//!
//! Pure functions over stat sheets and heart tracks. The floor engine calls
//! them and turns the outcomes into events and signals.
pub mod damage;
pub mod result;

pub use damage::{damage_to_autonomous, damage_to_controlled, damage_to_obstacle};
pub use result::{StrikeOutcome, WoundOutcome, strike_autonomous, wound_controlled};
