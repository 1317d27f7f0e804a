//! Shared error classification for crawler-core.
//!
//! Domain errors (`IntentError`, `GenerationError`, ...) live beside the code
//! that produces them and implement [`GameError`] so drivers can decide how
//! to react without matching on every variant.

/// Severity level of an error, used to pick a recovery strategy.
///
/// - **Recoverable**: the same request may succeed later (e.g. still moving)
/// - **Validation**: the request itself is wrong and should not be retried
/// - **Internal**: state and content disagree; indicates a bug
/// - **Fatal**: the run cannot continue (e.g. an exhausted placement pool)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or a broken run.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all crawler-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for the variant, used in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl GameError for crate::config::ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use crate::config::ConfigError;
        match self {
            ConfigError::BoardTooSmall { .. } => "CONFIG_BOARD_TOO_SMALL",
            ConfigError::NoBossFloor => "CONFIG_NO_BOSS_FLOOR",
            ConfigError::BoardOverfilled { .. } => "CONFIG_BOARD_OVERFILLED",
            ConfigError::EquipmentPoolTooSmall { .. } => "CONFIG_EQUIPMENT_POOL_TOO_SMALL",
        }
    }
}
