//! Repository layer for dynamic runtime data
//!
//! The only data that changes during play and outlives a floor is the
//! controlled entity's [`crawler_core::SessionState`]. It is saved when a
//! floor is left and loaded when the next one starts. Static content
//! (equipment, bestiary, configuration) comes from `crawler-content`.

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::InMemorySessionStore;
pub use traits::SessionStore;
