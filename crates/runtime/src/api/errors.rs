//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, the session store, content
//! loading and the core rules so clients can bubble them up with consistent
//! context.
use thiserror::Error;
use tokio::sync::oneshot;

use crawler_core::{CampaignError, ErrorSeverity, GameError, IntentError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("intent provider not set")]
    ProviderNotSet,

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("no floor is loaded")]
    NoActiveFloor,

    #[error(transparent)]
    Intent(#[from] IntentError),

    #[error(transparent)]
    Campaign(#[from] CampaignError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Content(#[from] anyhow::Error),
}

impl RuntimeError {
    /// Whether the run can go on after this error.
    ///
    /// Rejected intents are recoverable; everything else stops the runtime.
    pub fn is_recoverable(&self) -> bool {
        match self {
            RuntimeError::Intent(error) => matches!(
                error.severity(),
                ErrorSeverity::Recoverable | ErrorSeverity::Validation
            ),
            _ => false,
        }
    }
}
