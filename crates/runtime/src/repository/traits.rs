//! Repository contract for carrying session values between floors.

use crawler_core::SessionState;

use super::Result;

/// Store for the values the controlled entity carries between floors.
///
/// Written once when a floor is left and read once when the next one starts.
pub trait SessionStore: Send + Sync {
    /// Returns the saved session, or `None` for a fresh run.
    fn load(&self) -> Result<Option<SessionState>>;

    fn save(&self, session: &SessionState) -> Result<()>;

    /// Forgets the saved session so the next floor starts a fresh run.
    fn clear(&self) -> Result<()>;
}
