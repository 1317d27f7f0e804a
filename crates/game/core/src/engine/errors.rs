//! Errors surfaced by the floor engine and turn scheduler.

use crate::error::{ErrorSeverity, GameError};
use crate::state::EquipmentId;

use super::TurnPhase;

/// Rejected controlled-entity intent. A rejected intent never consumes the
/// turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntentError {
    #[error("intents are not accepted during {0:?}")]
    NotControlledTurn(TurnPhase),

    #[error("intent has no direction")]
    NoDirection,

    #[error("controlled entity is still moving")]
    StillMoving,

    #[error("floor references {0} which is missing from the catalog")]
    UnknownEquipment(EquipmentId),
}

impl GameError for IntentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            IntentError::NotControlledTurn(_) | IntentError::StillMoving => {
                ErrorSeverity::Recoverable
            }
            IntentError::NoDirection => ErrorSeverity::Validation,
            IntentError::UnknownEquipment(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            IntentError::NotControlledTurn(_) => "INTENT_NOT_CONTROLLED_TURN",
            IntentError::NoDirection => "INTENT_NO_DIRECTION",
            IntentError::StillMoving => "INTENT_STILL_MOVING",
            IntentError::UnknownEquipment(_) => "INTENT_UNKNOWN_EQUIPMENT",
        }
    }
}

/// Illegal phase transition requested from the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("cannot enter the controlled turn while the floor is being set up")]
    SetupInProgress,

    #[error("cannot leave terminal phase {0:?}")]
    Terminal(TurnPhase),

    #[error("expected {expected:?} but the scheduler is in {actual:?}")]
    UnexpectedPhase {
        expected: TurnPhase,
        actual: TurnPhase,
    },
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TurnError::SetupInProgress => ErrorSeverity::Recoverable,
            TurnError::Terminal(_) => ErrorSeverity::Validation,
            TurnError::UnexpectedPhase { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TurnError::SetupInProgress => "TURN_SETUP_IN_PROGRESS",
            TurnError::Terminal(_) => "TURN_TERMINAL",
            TurnError::UnexpectedPhase { .. } => "TURN_UNEXPECTED_PHASE",
        }
    }
}
