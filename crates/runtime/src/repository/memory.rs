use std::sync::RwLock;

use crawler_core::SessionState;

use super::{RepositoryError, Result, SessionStore};

/// In-process implementation of [`SessionStore`].
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    session: RwLock<Option<SessionState>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already saved session.
    pub fn with_session(session: SessionState) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<SessionState>> {
        let session = self
            .session
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(*session)
    }

    fn save(&self, session: &SessionState) -> Result<()> {
        let mut current = self
            .session
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = Some(*session);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut current = self
            .session
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_returns_the_session() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.load().unwrap(), None);

        let mut session = SessionState::default();
        session.lives = 2;
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
