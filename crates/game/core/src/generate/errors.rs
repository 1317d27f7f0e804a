use crate::error::{ErrorSeverity, GameError};

/// Floor generation ran out of something it must never run out of.
///
/// Configuration validation rules these out up front; hitting one at
/// generation time means the run is broken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerationError {
    #[error("floor {floor} ran out of free cells")]
    FreeCellsExhausted { floor: u32 },

    #[error("floor {floor} ran out of undrawn equipment")]
    EquipmentPoolExhausted { floor: u32 },

    #[error("floor {floor} needs an enemy but the bestiary has none")]
    EmptyBestiary { floor: u32 },

    #[error("floor {floor} places enemy template {template} which the bestiary lacks")]
    UnknownTemplate { floor: u32, template: u16 },
}

impl GameError for GenerationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            GenerationError::FreeCellsExhausted { .. } => "GEN_FREE_CELLS_EXHAUSTED",
            GenerationError::EquipmentPoolExhausted { .. } => "GEN_EQUIPMENT_POOL_EXHAUSTED",
            GenerationError::EmptyBestiary { .. } => "GEN_EMPTY_BESTIARY",
            GenerationError::UnknownTemplate { .. } => "GEN_UNKNOWN_TEMPLATE",
        }
    }
}
