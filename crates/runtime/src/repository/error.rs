//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("session store lock was poisoned")]
    LockPoisoned,

    #[error("session store backend failed: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
